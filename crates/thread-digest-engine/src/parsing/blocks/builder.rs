use log::debug;

use crate::parsing::inline::parse_inline;

use super::{classify::LineClass, types::GenericBlock};

/// Accumulates classified lines into [`GenericBlock`]s.
pub struct BlockBuilder {
    out: Vec<GenericBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    /// Tokenizes the line's content and appends a block for it.
    ///
    /// Lines whose content reduces to zero spans (for example `## ****`) are
    /// dropped: an empty heading or bullet carries nothing worth submitting.
    pub fn push(&mut self, c: &LineClass<'_>) {
        let spans = parse_inline(c.content);
        if spans.is_empty() {
            debug!(
                "line {}: {} has no text after removing emphasis markers, skipping",
                c.line_no, c.kind
            );
            return;
        }
        self.out.push(GenericBlock::new(c.kind.discriminator(), spans));
    }

    pub fn finish(self) -> Vec<GenericBlock> {
        self.out
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
