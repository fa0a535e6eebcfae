//! Undoable single-row deletes for DriftBrowser.
//!
//! A delete issued here returns a ticket capturing the row's storable
//! values and an expiry. Undoing within the window replays the values as a
//! fresh insert; row ids are never reused, so the restored row always has a
//! new id. Delete and restore share the URL's mutation lane, which keeps an
//! undo from racing its own delete.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::store::{RecordKind, RecordStore, RecordStoreTrait, RecordValues};
use crate::tasks::TaskRunner;

/// Receipt for one undoable delete.
#[derive(Debug, Clone)]
pub struct UndoTicket {
    deleted_id: i64,
    values: RecordValues,
    expires_at: Instant,
}

impl UndoTicket {
    pub fn kind(&self) -> RecordKind {
        self.values.kind()
    }

    /// Id the deleted row had. The restored row will not share it.
    pub fn deleted_id(&self) -> i64 {
        self.deleted_id
    }

    pub fn values(&self) -> &RecordValues {
        &self.values
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Time left to undo.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// Issues undoable deletes against the record store.
pub struct UndoDeleteCoordinator {
    store: Arc<RecordStore>,
    runner: Arc<TaskRunner>,
    window: Duration,
}

impl UndoDeleteCoordinator {
    pub fn new(store: Arc<RecordStore>, runner: Arc<TaskRunner>, window: Duration) -> Self {
        Self {
            store,
            runner,
            window,
        }
    }

    /// Deletes the row on its URL's mutation lane and returns the undo
    /// ticket. `values` must be the row's storable fields captured before
    /// the delete.
    pub fn delete_with_undo(&self, id: i64, values: RecordValues) -> UndoTicket {
        let kind = values.kind();
        let lane = kind.mutation_lane(values.url());
        let store = Arc::clone(&self.store);
        let url = values.url().to_string();
        self.runner.submit_ordered(
            &lane,
            move || store.delete_one(kind, id),
            move |result| match result {
                Ok(true) => log::debug!("Deleted row {} of '{}'", id, url),
                Ok(false) => log::debug!("Row {} of '{}' was already gone", id, url),
                Err(e) => log::warn!("Failed to delete row {}: {}", id, e),
            },
        );
        UndoTicket {
            deleted_id: id,
            values,
            expires_at: Instant::now() + self.window,
        }
    }

    /// Replays the ticket's values as a fresh insert on the same lane.
    /// Returns `false` without touching the store when the window has
    /// elapsed.
    pub fn undo(&self, ticket: UndoTicket) -> bool {
        if ticket.is_expired() {
            log::debug!(
                "Undo window elapsed for row {}; not restoring",
                ticket.deleted_id
            );
            return false;
        }
        let lane = ticket.values.kind().mutation_lane(ticket.values.url());
        let store = Arc::clone(&self.store);
        let old_id = ticket.deleted_id;
        let values = ticket.values;
        self.runner.submit_ordered(
            &lane,
            move || store.insert(&values),
            move |result| match result {
                Ok(id) => log::debug!("Restored row {} as new row {}", old_id, id),
                Err(e) => log::warn!("Failed to restore row {}: {}", old_id, e),
            },
        );
        true
    }
}
