//! Connectors around the conversion engine: a Slack message source, a
//! Notion page sink, and the glue that feeds one into the other.

pub mod notion;
pub mod slack;
pub mod submit;
pub mod threads;
pub mod traits;

pub use notion::NotionClient;
pub use slack::SlackClient;
pub use submit::{SubmitOutcome, submit_document};
pub use threads::collect_threads;
pub use traits::{ConnectorError, Message, MessageSource, PageId, PageSink};
