use log::info;
use thread_digest_engine::Document;

use crate::traits::{ConnectorError, PageId, PageSink};

/// Result of handing a document to a [`PageSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(PageId),
    /// The document had no blocks, so the sink was not called.
    NothingToSubmit,
}

/// Submits a finished document as a new page.
///
/// Empty documents are not sent. Sink failures are returned as-is and not
/// retried.
pub async fn submit_document<S: PageSink + ?Sized>(
    sink: &S,
    database_id: &str,
    title: &str,
    document: Document,
) -> Result<SubmitOutcome, ConnectorError> {
    if document.is_empty() {
        info!("Nothing to submit for {title:?}");
        return Ok(SubmitOutcome::NothingToSubmit);
    }

    let page_id = sink
        .create_page(database_id, title, document.into_blocks())
        .await?;
    Ok(SubmitOutcome::Created(page_id))
}
