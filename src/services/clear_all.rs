//! Bulk clearing for DriftBrowser.
//!
//! Clears a whole table off-thread while a progress indicator is showing.
//! The indicator stays up for at least the configured floor even when the
//! delete finishes sooner, so a near-instant clear will not flash it.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::store::{RecordKind, RecordStore, RecordStoreTrait};
use crate::tasks::TaskRunner;

/// Progress indicator controlled by a bulk clear.
pub trait ProgressSink: Send + Sync {
    fn show(&self);
    fn dismiss(&self);
}

/// Runs bulk clears with a minimum indicator duration.
pub struct ClearAllCoordinator {
    store: Arc<RecordStore>,
    runner: Arc<TaskRunner>,
    floor: Duration,
}

impl ClearAllCoordinator {
    pub fn new(store: Arc<RecordStore>, runner: Arc<TaskRunner>, floor: Duration) -> Self {
        Self {
            store,
            runner,
            floor,
        }
    }

    /// Shows `progress`, deletes every row of `kind` off-thread, and
    /// dismisses the indicator once both the delete and the floor have
    /// elapsed. Dismissal always arrives through the completion queue, even
    /// when the delete fails.
    pub fn clear_all(&self, kind: RecordKind, progress: Arc<dyn ProgressSink>) {
        progress.show();
        let shown_at = Instant::now();
        let store = Arc::clone(&self.store);
        let runner = Arc::clone(&self.runner);
        let floor = self.floor;
        self.runner.submit(
            move || store.delete_all(kind),
            move |result| {
                match result {
                    Ok(removed) => log::info!("Cleared {} rows from {}", removed, kind.table()),
                    Err(e) => log::warn!("Failed to clear {}: {}", kind.table(), e),
                }
                let remaining = floor.saturating_sub(shown_at.elapsed());
                if remaining.is_zero() {
                    progress.dismiss();
                    return;
                }
                runner.submit(
                    move || -> Result<(), ()> {
                        thread::sleep(remaining);
                        Ok(())
                    },
                    move |_| progress.dismiss(),
                );
            },
        );
    }
}
