//! App Core for DriftBrowser.
//!
//! Central struct wiring the database, record store, task runner, and
//! services together, and managing application lifecycle.

use std::sync::Arc;
use std::time::Duration;

use crate::database::connection::Database;
use crate::platform;
use crate::services::clear_all::ClearAllCoordinator;
use crate::services::session::BrowsingSession;
use crate::services::settings_store::{SettingsStore, SettingsStoreTrait};
use crate::services::share::ShareComposer;
use crate::services::undo_delete::UndoDeleteCoordinator;
use crate::store::RecordStore;
use crate::tasks::TaskRunner;

/// Central application struct holding the store, runner, and services.
///
/// Everything a consumer binds lists or issues mutations through hangs off
/// this struct. The runner's completions are drained by whoever owns the
/// `App`, via `app.runner.poll()`.
pub struct App {
    pub db: Arc<Database>,
    pub store: Arc<RecordStore>,
    pub runner: Arc<TaskRunner>,
    pub settings: SettingsStore,
    pub session: Arc<BrowsingSession>,
    pub undo: UndoDeleteCoordinator,
    pub clear_all: ClearAllCoordinator,
    pub share: ShareComposer,
}

impl App {
    /// Creates a new App, opening the database and wiring all services.
    ///
    /// The undo window and progress floor come from the loaded settings;
    /// a missing or unreadable settings file falls back to defaults.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let store = Arc::new(RecordStore::new(db.clone()));
        let runner = Arc::new(TaskRunner::new());

        let mut settings = SettingsStore::new(None);
        let _ = settings.load();
        let cfg = settings.get_settings().clone();

        let session = Arc::new(BrowsingSession::new(store.clone(), runner.clone(), false));
        let undo = UndoDeleteCoordinator::new(
            store.clone(),
            runner.clone(),
            Duration::from_millis(cfg.lists.undo_window_ms),
        );
        let clear_all = ClearAllCoordinator::new(
            store.clone(),
            runner.clone(),
            Duration::from_millis(cfg.lists.clear_all_floor_ms),
        );
        let share = ShareComposer::new(platform::get_cache_dir(), cfg.sharing.attach_snapshot);

        Ok(Self {
            db,
            store,
            runner,
            settings,
            session,
            undo,
            clear_all,
            share,
        })
    }

    /// Startup sequence: reload settings and report stored row counts.
    pub fn startup(&mut self) {
        use crate::store::{RecordKind, RecordStoreTrait};

        let _ = self.settings.load();

        match self.store.count(RecordKind::History) {
            Ok(count) => log::info!("History holds {} entries", count),
            Err(e) => log::warn!("Could not count history entries: {}", e),
        }
        match self.store.count(RecordKind::Favorites) {
            Ok(count) => log::info!("Favorites hold {} entries", count),
            Err(e) => log::warn!("Could not count favorite entries: {}", e),
        }
    }

    /// Shutdown sequence: drain any completions still queued.
    pub fn shutdown(&mut self) {
        let delivered = self.runner.poll();
        if delivered > 0 {
            log::info!("Delivered {} pending completions on shutdown", delivered);
        }
    }
}
