//! # Inline Parsing
//!
//! Splits block content into rich-text spans. Only strong emphasis (`**`) is
//! recognised; everything else is literal text.
//!
//! ## Modules
//!
//! - **`types`**: `RichSpan` (text + bold flag)
//! - **`kinds`**: Inline-specific types with owned delimiters (`Strong`)
//! - **`parser`**: `parse_inline()` entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::RichSpan;
