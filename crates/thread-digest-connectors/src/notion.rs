use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use thread_digest_engine::{RichSpan, TypedBlock, wire::RichTextBody};

use crate::traits::{ConnectorError, PageId, PageSink};

pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";

/// Notion rejects requests carrying more child blocks than this.
pub const MAX_CHILDREN_PER_REQUEST: usize = 100;

/// Title property of the target database.
const TITLE_PROPERTY: &str = "Name";

/// Page sink backed by the Notion API.
#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct CreatedPage {
    id: String,
}

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Request body for `POST /pages`.
pub fn page_request(database_id: &str, title: &str, children: &[TypedBlock]) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            TITLE_PROPERTY: {
                "title": RichTextBody::from_spans(&[RichSpan::plain(title)]).rich_text
            }
        },
        "children": children,
    })
}

/// Turns a non-success response into a submission error carrying Notion's
/// own `code` and `message` where the body has them.
async fn remote_error(resp: Response) -> ConnectorError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ConnectorError::RemoteSubmission(describe_error(status.as_u16(), &body))
}

fn describe_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(e) if !e.code.is_empty() => format!("{status} {}: {}", e.code, e.message),
        _ => format!("{status}: {body}"),
    }
}

impl NotionClient {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, NOTION_API_BASE)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder, body: &Value) -> Result<Response, ConnectorError> {
        let resp = req
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(remote_error(resp).await);
        }
        Ok(resp)
    }

    async fn append_children(&self, page_id: &PageId, children: &[TypedBlock]) -> Result<(), ConnectorError> {
        let url = format!("{}/blocks/{}/children", self.base_url, page_id);
        debug!("PATCH {url} ({} blocks)", children.len());
        self.send(self.client.patch(&url), &json!({ "children": children }))
            .await?;
        Ok(())
    }

    async fn archive_page(&self, page_id: &PageId) -> Result<(), ConnectorError> {
        let url = format!("{}/pages/{}", self.base_url, page_id);
        debug!("PATCH {url} (archive)");
        self.send(self.client.patch(&url), &json!({ "archived": true }))
            .await?;
        Ok(())
    }

    /// Archives a page whose content could only be partly written, so a
    /// failed submission leaves nothing visible behind.
    async fn roll_back(&self, page_id: &PageId, cause: ConnectorError) -> ConnectorError {
        let detail = match cause {
            ConnectorError::RemoteSubmission(detail) => detail,
            other => other.to_string(),
        };
        match self.archive_page(page_id).await {
            Ok(()) => {
                warn!("Archived page {page_id} after a failed append");
                ConnectorError::RemoteSubmission(format!(
                    "appending content to page {page_id} failed, page archived: {detail}"
                ))
            }
            Err(archive_err) => ConnectorError::RemoteSubmission(format!(
                "appending content to page {page_id} failed: {detail}; \
                 archiving the partial page also failed: {archive_err}"
            )),
        }
    }
}

#[async_trait]
impl PageSink for NotionClient {
    /// Creates the page with the first batch of blocks and appends the rest
    /// in batches of [`MAX_CHILDREN_PER_REQUEST`]. If any append fails the
    /// page is archived before the error is returned.
    async fn create_page(
        &self,
        database_id: &str,
        title: &str,
        blocks: Vec<TypedBlock>,
    ) -> Result<PageId, ConnectorError> {
        let mut batches = blocks.chunks(MAX_CHILDREN_PER_REQUEST);
        let first = batches.next().unwrap_or(&[]);

        let url = format!("{}/pages", self.base_url);
        debug!("POST {url} ({} blocks)", first.len());
        let resp = self
            .send(self.client.post(&url), &page_request(database_id, title, first))
            .await?;

        let created: CreatedPage = resp
            .json()
            .await
            .map_err(|e| ConnectorError::Decode(e.to_string()))?;
        let page_id = PageId(created.id);

        for batch in batches {
            if let Err(e) = self.append_children(&page_id, batch).await {
                return Err(self.roll_back(&page_id, e).await);
            }
        }

        info!("Created page {page_id} with {} blocks", blocks.len());
        Ok(page_id)
    }
}
