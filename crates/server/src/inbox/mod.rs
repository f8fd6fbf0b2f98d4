//! Conversation handling over rows fetched from the upstream service:
//! grouping into threads, rendering bubbles, the row cache, and the two
//! write paths (auto-reply flag and manual replies).

mod auto_reply;
mod cache;
mod group;
mod render;
mod reply;
mod time;

pub use auto_reply::AutoReplyController;
pub use cache::{FetchTicket, InboxCache, InboxState};
pub use group::{classify, group_conversations, group_threads, Thread};
pub use render::{escape_html, render_thread};
pub use reply::send_reply;
pub use time::{format_display_time, format_relative, parse_timestamp};

use crate::error::UpstreamError;
use crate::upstream::UpstreamClient;

/// Fetches all rows and stores them unless a newer fetch finished first.
/// Returns the cache contents after the fetch.
pub async fn refresh(
    upstream: &UpstreamClient,
    cache: &InboxCache,
) -> Result<InboxState, UpstreamError> {
    let ticket = cache.begin_fetch();
    let rows = upstream.fetch_rows().await?;
    tracing::debug!("Fetched {} rows (ticket {})", rows.len(), ticket.0);
    cache.apply(ticket, rows).await;
    Ok(cache.snapshot().await)
}
