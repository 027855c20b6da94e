//! # Block Segmentation
//!
//! Two-phase, line-oriented segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and classified
//!    into a `LineClass` (heading, bullet item or paragraph) with its prefix
//!    stripped. Blank lines produce nothing.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` runs inline parsing
//!    over each line's content and emits one `GenericBlock` per line.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`GenericBlock`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned prefixes (Heading, BulletItem, Paragraph)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` collects the blocks
//!
//! ## Key Invariants
//!
//! - Every block comes from exactly one non-blank line
//! - Block order follows line order
//! - No block has zero spans

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{BlockKind, GenericBlock};
