use async_trait::async_trait;
use serde::Deserialize;
use thread_digest_engine::TypedBlock;

/// A chat message as returned by the message history source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
    /// Timestamp of this message, which doubles as its ID.
    #[serde(default)]
    pub ts: String,
    /// Set on messages that start or belong to a thread.
    #[serde(default)]
    pub thread_ts: Option<String>,
}

impl Message {
    /// The thread timestamp, if this message has a non-empty one.
    pub fn thread_ts(&self) -> Option<&str> {
        self.thread_ts.as_deref().filter(|ts| !ts.is_empty())
    }
}

/// ID of a page created by a [`PageSink`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(pub String);

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where messages come from.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Most recent messages of a channel, newest first, at most `limit`.
    async fn fetch_history(
        &self,
        channel_id: &str,
        limit: usize,
    ) -> Result<Vec<Message>, ConnectorError>;

    /// All messages of a thread. The first element is the parent message,
    /// followed by replies in chronological order.
    async fn fetch_thread_replies(
        &self,
        channel_id: &str,
        parent_ts: &str,
    ) -> Result<Vec<Message>, ConnectorError>;
}

/// Where finished documents go.
#[async_trait]
pub trait PageSink: Send + Sync {
    /// Creates a page titled `title` under the given database, holding
    /// `blocks` as its content.
    async fn create_page(
        &self,
        database_id: &str,
        title: &str,
        blocks: Vec<TypedBlock>,
    ) -> Result<PageId, ConnectorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("API error: {0}")]
    Api(String),
    #[error("remote submission failed: {0}")]
    RemoteSubmission(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
