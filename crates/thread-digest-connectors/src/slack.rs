use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::traits::{ConnectorError, Message, MessageSource};

pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Message source backed by the Slack Web API.
#[derive(Clone)]
pub struct SlackClient {
    client: Client,
    base_url: String,
    token: String,
}

/// Slack wraps every response in an `ok`/`error` envelope, with HTTP 200
/// even for failures.
#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<Message>,
}

impl SlackResponse {
    fn into_messages(self) -> Result<Vec<Message>, ConnectorError> {
        if self.ok {
            Ok(self.messages)
        } else {
            Err(ConnectorError::Api(
                self.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }
}

impl SlackClient {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, SLACK_API_BASE)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn list_messages(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Message>, ConnectorError> {
        let url = format!("{}/{}", self.base_url, method);
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body: SlackResponse = resp.json().await?;
        body.into_messages()
    }
}

#[async_trait]
impl MessageSource for SlackClient {
    async fn fetch_history(
        &self,
        channel_id: &str,
        limit: usize,
    ) -> Result<Vec<Message>, ConnectorError> {
        self.list_messages(
            "conversations.history",
            &[
                ("channel", channel_id.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn fetch_thread_replies(
        &self,
        channel_id: &str,
        parent_ts: &str,
    ) -> Result<Vec<Message>, ConnectorError> {
        self.list_messages(
            "conversations.replies",
            &[
                ("channel", channel_id.to_string()),
                ("ts", parent_ts.to_string()),
            ],
        )
        .await
    }
}
