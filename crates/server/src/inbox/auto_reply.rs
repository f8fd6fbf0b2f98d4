use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::cache::InboxCache;
use crate::error::AutoReplyError;
use crate::models::UpdateAutoReplyRequest;
use crate::upstream::{Endpoint, UpstreamClient};

/// Writes the per-thread auto-reply flag with a local cooldown between attempts.
///
/// The cooldown is a courtesy limit: every attempt, successful or not, locks
/// the thread's toggle for `cooldown`, and a locked attempt never reaches the
/// upstream service.
pub struct AutoReplyController {
    cooldown: Duration,
    last_attempt: Mutex<HashMap<String, Instant>>,
}

impl AutoReplyController {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_attempt: Mutex::new(HashMap::new()),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Starts an attempt for `thread_id` at `now`, or reports how long is left.
    pub fn try_begin(&self, thread_id: &str, now: Instant) -> Result<(), AutoReplyError> {
        let mut attempts = self
            .last_attempt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(&started) = attempts.get(thread_id) {
            let elapsed = now.saturating_duration_since(started);
            if elapsed < self.cooldown {
                return Err(AutoReplyError::CoolingDown {
                    remaining: self.cooldown - elapsed,
                });
            }
        }

        let cooldown = self.cooldown;
        attempts.retain(|_, started| now.saturating_duration_since(*started) < cooldown);
        attempts.insert(thread_id.to_string(), now);
        Ok(())
    }

    /// Enables or disables auto-reply for a loaded thread.
    ///
    /// The write targets the thread's first row. On success the cached flag is
    /// updated; on any failure it keeps its previous value.
    pub async fn set_auto_reply(
        &self,
        upstream: &UpstreamClient,
        cache: &InboxCache,
        thread_id: &str,
        enabled: bool,
    ) -> Result<(), AutoReplyError> {
        self.try_begin(thread_id, Instant::now())?;

        let thread = cache
            .thread(thread_id)
            .await
            .ok_or(AutoReplyError::NotLoaded)?;
        let first_row_num = thread.first().row_num;

        let request = UpdateAutoReplyRequest {
            row_num: first_row_num,
            processed: enabled.then_some(true),
        };
        let ack = upstream.post_for_result(Endpoint::UpdateAi, &request).await?;
        if !ack.accepted() {
            tracing::warn!("Upstream rejected auto-reply update for row {}", first_row_num);
            return Err(AutoReplyError::Rejected);
        }

        cache.set_processed(thread_id, first_row_num, enabled).await;
        tracing::info!(
            "Auto-reply {} for row {}",
            if enabled { "enabled" } else { "disabled" },
            first_row_num
        );
        Ok(())
    }
}
