use textdesk_shared::validation::{validate_reply_text, validate_thread_id};

use super::cache::InboxCache;
use crate::error::ReplyError;
use crate::models::SendReplyRequest;
use crate::upstream::{Endpoint, UpstreamClient};

/// Sends a manual reply into a loaded thread. Not retried on failure.
pub async fn send_reply(
    upstream: &UpstreamClient,
    cache: &InboxCache,
    thread_id: &str,
    text: &str,
) -> Result<(), ReplyError> {
    validate_thread_id(thread_id).map_err(ReplyError::Invalid)?;
    let text = validate_reply_text(text).map_err(ReplyError::Invalid)?;
    let thread = cache.thread(thread_id).await.ok_or(ReplyError::NotLoaded)?;

    let request = SendReplyRequest {
        id: thread.id().to_string(),
        text,
        the_type: thread.kind().as_str().to_string(),
    };
    let ack = upstream
        .post_for_result(Endpoint::SendReply, &request)
        .await?;
    if !ack.accepted() {
        return Err(ReplyError::Rejected);
    }
    Ok(())
}
