/// A per-record failure while materializing generic blocks.
///
/// These never abort a conversion: the offending record is dropped and the
/// rest of the input is still materialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("block {index}: unsupported block type {kind:?}")]
    UnsupportedBlockType { index: usize, kind: String },

    #[error("block {index}: malformed record: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

impl ConversionError {
    /// Position of the offending record in the input sequence.
    pub fn index(&self) -> usize {
        match self {
            ConversionError::UnsupportedBlockType { index, .. }
            | ConversionError::MalformedRecord { index, .. } => *index,
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        ConversionError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}
