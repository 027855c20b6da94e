use serde::{Deserialize, Serialize};

use crate::parsing::inline::RichSpan;

/// The closed set of block kinds the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A level-two heading (`## `).
    #[serde(rename = "heading_2")]
    Heading,
    /// A bulleted list item (`- `).
    #[serde(rename = "bulleted_list_item")]
    BulletItem,
    /// A plain paragraph (default when no other prefix matches).
    Paragraph,
}

impl BlockKind {
    pub const ALL: [BlockKind; 3] = [
        BlockKind::Heading,
        BlockKind::BulletItem,
        BlockKind::Paragraph,
    ];

    /// The wire discriminator for this kind.
    pub fn discriminator(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading_2",
            BlockKind::BulletItem => "bulleted_list_item",
            BlockKind::Paragraph => "paragraph",
        }
    }

    /// Looks up a kind by its wire discriminator.
    ///
    /// Matching is exact; `"Heading_2"` or `" paragraph"` are not recognised.
    pub fn from_discriminator(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.discriminator() == s)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// A loosely typed block: a discriminator string plus its rich-text spans.
///
/// This is the hand-off shape between producers (the segmenter, decoded
/// foreign records, hand-built fixtures) and the materializer. The
/// discriminator is kept as a string so unrecognised kinds survive until
/// materialization can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericBlock {
    pub kind: String,
    pub spans: Vec<RichSpan>,
}

impl GenericBlock {
    pub fn new(kind: impl Into<String>, spans: Vec<RichSpan>) -> Self {
        Self {
            kind: kind.into(),
            spans,
        }
    }

    /// Concatenated span text with emphasis markers removed.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
