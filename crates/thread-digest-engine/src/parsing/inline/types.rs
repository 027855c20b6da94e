use serde::{Deserialize, Serialize};

/// A run of text sharing one emphasis state.
///
/// Spans are owned strings rather than byte ranges: blocks leave the engine
/// and are serialized for a remote API, so they must not borrow the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichSpan {
    /// The text of the run, with emphasis delimiters removed.
    pub text: String,
    /// Whether the run sat between two `**` delimiters.
    #[serde(default)]
    pub bold: bool,
}

impl RichSpan {
    /// A plain (non-emphasized) span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// A bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}
