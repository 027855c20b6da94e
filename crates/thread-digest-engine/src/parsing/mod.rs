pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, GenericBlock, LineClassifier};

/// Segments a markdown-like document into [`GenericBlock`]s, one per
/// non-blank line, in source order.
///
/// Segmentation never fails: every line is either blank, a heading, a bullet
/// item or a paragraph.
pub fn segment(document_text: &str) -> Vec<GenericBlock> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for (i, line) in document_text.lines().enumerate() {
        if let Some(lc) = classifier.classify(i + 1, line) {
            builder.push(&lc);
        }
    }

    builder.finish()
}
