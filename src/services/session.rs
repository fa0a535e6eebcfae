//! Browsing session for DriftBrowser.
//!
//! Tracks the page a session is on and feeds confirmed page titles into the
//! history table. Recording is keyed by the page URL and routed through the
//! runner's ordered lanes, so a visit and a deletion of the same URL settle
//! in submission order. Incognito sessions record nothing.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::store::{now_millis, RecordKind, RecordStore, RecordStoreTrait};
use crate::tasks::TaskRunner;
use crate::types::errors::StoreError;

/// Trait defining the browsing session operations.
pub trait BrowsingSessionTrait {
    fn load_url(&self, url: &str);
    fn current_url(&self) -> Option<String>;
    fn is_incognito(&self) -> bool;
    /// Called when the page delivers its title; records the visit.
    fn on_title_received(&self, title: &str);
}

/// One browsing surface with its own current URL and privacy mode.
pub struct BrowsingSession {
    store: Arc<RecordStore>,
    runner: Arc<TaskRunner>,
    url: Mutex<Option<String>>,
    incognito: bool,
}

impl BrowsingSession {
    pub fn new(store: Arc<RecordStore>, runner: Arc<TaskRunner>, incognito: bool) -> Self {
        Self {
            store,
            runner,
            url: Mutex::new(None),
            incognito,
        }
    }

    /// Pins the current page as a favorite and acknowledges to `target`
    /// once the row exists. The acknowledgement is skipped when the target
    /// has been torn down before the completion drains.
    pub fn pin_favorite<U, F>(&self, title: &str, color: u32, target: &Arc<U>, ack: F)
    where
        U: Send + Sync + 'static,
        F: FnOnce(&U, i64) + Send + 'static,
    {
        let url = match self.url.lock().clone() {
            Some(url) => url,
            None => {
                log::warn!("No page loaded; favorite not pinned");
                return;
            }
        };
        let store = Arc::clone(&self.store);
        let title = title.to_string();
        self.runner.submit_with_target(
            target,
            move || store.insert_favorite(&title, &url, color),
            move |target, result: Result<i64, StoreError>| match result {
                Ok(id) => ack(target, id),
                Err(e) => log::warn!("Failed to pin favorite: {}", e),
            },
        );
    }
}

impl BrowsingSessionTrait for BrowsingSession {
    fn load_url(&self, url: &str) {
        log::debug!("Loading '{}'", url);
        *self.url.lock() = Some(url.to_string());
    }

    fn current_url(&self) -> Option<String> {
        self.url.lock().clone()
    }

    fn is_incognito(&self) -> bool {
        self.incognito
    }

    /// Upserts the history row for the current URL with the received title
    /// and a fresh timestamp. Runs on the URL's mutation lane.
    fn on_title_received(&self, title: &str) {
        if self.incognito {
            log::debug!("Incognito session; not recording '{}'", title);
            return;
        }
        let url = match self.url.lock().clone() {
            Some(url) => url,
            None => {
                log::warn!("Title '{}' arrived with no page loaded; not recording", title);
                return;
            }
        };

        let store = Arc::clone(&self.store);
        let title = title.to_string();
        let lane = RecordKind::History.mutation_lane(&url);
        let recorded_url = url.clone();
        self.runner.submit_ordered(
            &lane,
            move || store.upsert_history(&title, &url, now_millis()),
            move |result| match result {
                Ok(id) => log::debug!("Recorded visit to '{}' as row {}", recorded_url, id),
                Err(e) => log::warn!("Failed to record visit to '{}': {}", recorded_url, e),
            },
        );
    }
}
