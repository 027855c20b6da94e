use super::{
    kinds::{BulletItem, Heading},
    types::BlockKind,
};

/// Classification of a single non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// 1-based line number in the source text.
    pub line_no: usize,
    /// Which block this line opens.
    pub kind: BlockKind,
    /// Content left after stripping the block prefix, ready for inline parsing.
    pub content: &'a str,
}

/// Classifies individual lines for segmentation.
///
/// Each line is classified on its own; no block spans more than one line.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a raw line. Returns `None` for lines that are blank after
    /// trimming, since blank lines only separate blocks.
    ///
    /// Prefixes are tried in priority order: heading, bullet, then paragraph.
    pub fn classify<'a>(&self, line_no: usize, raw: &'a str) -> Option<LineClass<'a>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (kind, content) = if let Some(rest) = Heading::strip(trimmed) {
            (BlockKind::Heading, rest)
        } else if let Some(rest) = BulletItem::strip(trimmed) {
            (BlockKind::BulletItem, rest)
        } else {
            (BlockKind::Paragraph, trimmed)
        };

        Some(LineClass {
            line_no,
            kind,
            content,
        })
    }
}
