//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Strong`**: `DELIM = "**"` - toggles bold on every occurrence
//!
//! The parser calls these constants; it never hardcodes `**`.

pub mod strong;

pub use strong::Strong;
