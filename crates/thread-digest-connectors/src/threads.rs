use log::{info, warn};
use thread_digest_engine::Thread;

use crate::traits::{ConnectorError, MessageSource};

/// Collects every thread started in the last `limit` messages of a channel.
///
/// A failure to fetch the history is returned. A failure to fetch one
/// thread's replies is logged and that thread is skipped.
pub async fn collect_threads<S: MessageSource + ?Sized>(
    source: &S,
    channel_id: &str,
    limit: usize,
) -> Result<Vec<Thread>, ConnectorError> {
    let history = source.fetch_history(channel_id, limit).await?;
    let mut threads = vec![];

    for message in history {
        let Some(thread_ts) = message.thread_ts() else {
            continue;
        };

        let replies = match source.fetch_thread_replies(channel_id, thread_ts).await {
            Ok(replies) => replies,
            Err(e) => {
                warn!("Error fetching thread replies for {thread_ts}: {e}");
                continue;
            }
        };

        // The listing starts with the parent itself
        let replies: Vec<String> = replies.into_iter().skip(1).map(|m| m.text).collect();
        threads.push(Thread::new(message.text, replies));
    }

    info!("Collected {} threads from {channel_id}", threads.len());
    Ok(threads)
}
