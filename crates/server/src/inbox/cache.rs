use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use super::group::Thread;
use crate::models::MessageRow;

/// Ticket handed out when a fetch starts. Higher tickets are newer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(pub u64);

/// Rows as of the newest fetch that has completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboxState {
    pub rows: Vec<MessageRow>,
    /// Ticket of the fetch that produced `rows`; 0 before the first load.
    pub generation: u64,
}

impl InboxState {
    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }

    /// Applies a completed fetch. Responses older than the current rows are dropped.
    pub fn apply(self, ticket: FetchTicket, rows: Vec<MessageRow>) -> (InboxState, bool) {
        if ticket.0 <= self.generation {
            return (self, false);
        }
        (
            InboxState {
                rows,
                generation: ticket.0,
            },
            true,
        )
    }

    pub fn thread(&self, id: &str) -> Option<Thread> {
        Thread::load(&self.rows, id)
    }

    /// Sets the auto-reply flag on a row. Returns false if the row is absent.
    pub fn with_processed(mut self, id: &str, row_num: i64, enabled: bool) -> (InboxState, bool) {
        let found = match self
            .rows
            .iter_mut()
            .find(|r| r.id == id && r.row_num == row_num)
        {
            Some(row) => {
                row.processed = enabled.then_some(serde_json::Value::Bool(true));
                true
            }
            None => false,
        };
        (self, found)
    }
}

/// Shared holder for the latest [`InboxState`].
#[derive(Default)]
pub struct InboxCache {
    next_ticket: AtomicU64,
    state: RwLock<InboxState>,
}

impl InboxCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Stores rows unless a newer fetch already landed. Returns whether they were applied.
    pub async fn apply(&self, ticket: FetchTicket, rows: Vec<MessageRow>) -> bool {
        let mut state = self.state.write().await;
        let (next, applied) = std::mem::take(&mut *state).apply(ticket, rows);
        *state = next;
        if !applied {
            tracing::debug!("Dropping stale fetch result (ticket {})", ticket.0);
        }
        applied
    }

    pub async fn snapshot(&self) -> InboxState {
        self.state.read().await.clone()
    }

    pub async fn thread(&self, id: &str) -> Option<Thread> {
        self.state.read().await.thread(id)
    }

    pub async fn set_processed(&self, id: &str, row_num: i64, enabled: bool) -> bool {
        let mut state = self.state.write().await;
        let (next, found) = std::mem::take(&mut *state).with_processed(id, row_num, enabled);
        *state = next;
        found
    }
}
