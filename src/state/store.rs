//! Pagination store implementation
//!
//! Holds the current [`Pagination`] snapshot behind a watch channel. Every
//! mutation is a read-modify-write under the channel lock, so readers only
//! ever see complete snapshots.

use crate::pagination::{ListMetadata, Pagination};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Owned pagination state with change notification
#[derive(Debug)]
pub struct PaginationStore {
    /// Current state, shared with subscribers
    sender: Arc<watch::Sender<Pagination>>,
}

impl PaginationStore {
    /// Create a store holding the empty pagination state
    pub fn new() -> Self {
        Self::with_state(Pagination::default())
    }

    /// Create a store holding the given state
    pub fn with_state(pagination: Pagination) -> Self {
        let (sender, _) = watch::channel(pagination);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Create a store initialized from list metadata
    pub fn from_metadata(metadata: &ListMetadata) -> Self {
        Self::with_state(Pagination::from_metadata(metadata))
    }

    /// Get the latest snapshot
    pub fn current(&self) -> Pagination {
        *self.sender.borrow()
    }

    /// Subscribe to state changes
    ///
    /// The receiver sees the current snapshot immediately and is notified on
    /// every change after that.
    pub fn subscribe(&self) -> watch::Receiver<Pagination> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Re-derive the whole state from metadata
    pub fn initialize(&self, total: i64, per_page: i64, current_page: Option<i64>) -> Pagination {
        self.replace(Pagination::initialize(total, per_page, current_page))
    }

    /// Re-derive the whole state from a metadata struct
    pub fn initialize_from(&self, metadata: &ListMetadata) -> Pagination {
        self.replace(Pagination::from_metadata(metadata))
    }

    /// Replace the stored state wholesale
    pub fn replace(&self, pagination: Pagination) -> Pagination {
        self.sender.send_replace(pagination);
        debug!(
            current_page = pagination.current_page,
            total_pages = %pagination.total_pages,
            page_size = pagination.page_size,
            total_items = pagination.total_items,
            "Pagination replaced"
        );
        pagination
    }

    /// Move to the next page
    pub fn advance(&self) -> Pagination {
        self.apply("advance", Pagination::advance)
    }

    /// Move to the previous page
    pub fn retreat(&self) -> Pagination {
        self.apply("retreat", Pagination::retreat)
    }

    /// Jump to the first page
    pub fn reset(&self) -> Pagination {
        self.apply("reset", Pagination::reset)
    }

    /// Apply a transition atomically, notifying subscribers only on change
    fn apply(&self, operation: &'static str, transition: fn(Pagination) -> Pagination) -> Pagination {
        let mut next = Pagination::default();
        let changed = self.sender.send_if_modified(|state| {
            next = transition(*state);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });

        if changed {
            debug!(
                operation,
                current_page = next.current_page,
                total_pages = %next.total_pages,
                next_enabled = next.next_enabled,
                previous_enabled = next.previous_enabled,
                "Pagination updated"
            );
        } else {
            trace!(operation, current_page = next.current_page, "Pagination unchanged");
        }

        next
    }
}

impl Default for PaginationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PaginationStore {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}
