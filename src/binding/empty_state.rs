//! Empty-state tracking for DriftBrowser lists.

use std::sync::atomic::{AtomicBool, Ordering};

use super::list_binding::DatasetObserver;

/// Tracks whether a bound list should show its empty placeholder.
///
/// Starts out empty so a list renders the placeholder until the first
/// snapshot arrives.
pub struct EmptyStateObserver {
    empty: AtomicBool,
}

impl EmptyStateObserver {
    pub fn new() -> Self {
        Self {
            empty: AtomicBool::new(true),
        }
    }

    pub fn is_empty_visible(&self) -> bool {
        self.empty.load(Ordering::SeqCst)
    }
}

impl DatasetObserver for EmptyStateObserver {
    fn on_dataset_changed(&self, count: usize) {
        self.empty.store(count == 0, Ordering::SeqCst);
    }
}

impl Default for EmptyStateObserver {
    fn default() -> Self {
        Self::new()
    }
}
