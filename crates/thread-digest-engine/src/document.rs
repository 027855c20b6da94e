use serde::Serialize;

use crate::{
    materialize::{ConversionError, TypedBlock, materialize},
    parsing::segment,
};

/// An ordered sequence of validated blocks, ready for submission.
///
/// Produced once per [`build_document`] call and handed over by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<TypedBlock>,
}

impl Document {
    pub fn blocks(&self) -> &[TypedBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<TypedBlock> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<TypedBlock>> for Document {
    fn from(blocks: Vec<TypedBlock>) -> Self {
        Self { blocks }
    }
}

impl IntoIterator for Document {
    type Item = TypedBlock;
    type IntoIter = std::vec::IntoIter<TypedBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a TypedBlock;
    type IntoIter = std::slice::Iter<'a, TypedBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Converts markdown-like text into a [`Document`].
///
/// Segments the text and materializes the result. Conversion errors are
/// returned alongside the document rather than failing the call; an input
/// with no content lines yields an empty document.
pub fn build_document(raw_text: &str) -> (Document, Vec<ConversionError>) {
    let (blocks, errors) = materialize(segment(raw_text));
    (Document::from(blocks), errors)
}
