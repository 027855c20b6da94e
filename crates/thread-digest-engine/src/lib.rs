//! Converts markdown-like thread summaries into validated Notion blocks.
//!
//! The pipeline runs in two steps: [`parsing::segment`] turns text into
//! loosely typed [`GenericBlock`]s, then [`materialize::materialize`] checks
//! each one against the closed set of [`BlockKind`]s and produces
//! [`TypedBlock`]s. [`build_document`] runs both.

pub mod document;
pub mod materialize;
pub mod parsing;
pub mod summary;
pub mod wire;

// Re-export key types for easier usage
pub use document::{Document, build_document};
pub use materialize::{ConversionError, TypedBlock, materialize, materialize_records};
pub use parsing::{
    blocks::{BlockKind, GenericBlock},
    inline::RichSpan,
    segment,
};
pub use summary::{Thread, render_all};
