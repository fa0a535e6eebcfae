//! DriftBrowser — the persistence and list-synchronization core of a
//! minimal mobile-style web browser.
//!
//! Entry point: runs an interactive console demo exercising every component
//! the way a browser shell would drive it.

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║             DriftBrowser v{} — Demo Mode             ║", env!("CARGO_PKG_VERSION"));
    println!("║     Persistence core for a minimal mobile web browser      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_record_store();
    demo_result_set();
    demo_task_runner();
    demo_list_binding();
    demo_session();
    demo_undo_delete();
    demo_clear_all();
    demo_accent();
    demo_share();
    demo_permissions();
    demo_intent_router();
    demo_settings();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 14 components demonstrated successfully!");
    println!("  DriftBrowser core is ready for shell integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use driftbrowser::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_record_store() {
    use std::sync::Arc;
    use driftbrowser::database::connection::Database;
    use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait};
    section("Record Store");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = RecordStore::new(db);

    let id1 = store
        .upsert_history("Example", "https://example.com", 1_700_000_000_000)
        .unwrap();
    let id2 = store
        .upsert_history("Example Home", "https://example.com", 1_700_000_100_000)
        .unwrap();
    println!("  Upserted same URL twice: id {} then {}", id1, id2);
    println!("  History rows: {}", store.count(RecordKind::History).unwrap());

    let fav = store
        .insert_favorite("Example", "https://example.com", 0x2ea4_4fff)
        .unwrap();
    println!("  Pinned favorite as row {}", fav);

    let removed = store.delete_one(RecordKind::Favorites, fav).unwrap();
    let absent = store.delete_one(RecordKind::Favorites, fav).unwrap();
    println!("  Deleted favorite: {} (repeat delete: {})", removed, absent);
    println!("  ✓ RecordStore OK");
    println!();
}

fn demo_result_set() {
    use std::sync::Arc;
    use driftbrowser::database::connection::Database;
    use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait, SortOrder};
    use driftbrowser::types::history::format_timestamp;
    section("Result Set");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = RecordStore::new(db);
    store.upsert_history("Rust", "https://rust-lang.org", 1_700_000_000_000).unwrap();
    store.upsert_history("Crates", "https://crates.io", 1_700_000_200_000).unwrap();

    let results = store
        .query(RecordKind::History, Some(SortOrder::NewestFirst))
        .unwrap();
    println!("  Snapshot handle {}: {} rows", results.handle_id(), results.count());

    let title_col = results.column_index("title");
    let ts_col = results.column_index("timestamp");
    while results.advance() {
        let title = results.text_value(title_col).unwrap();
        let ts = results.i64_value(ts_col).unwrap();
        println!("    [{}] {} ({})", results.position(), title, format_timestamp(ts));
    }

    results.close();
    println!("  After close: count = {}, closed = {}", results.count(), results.is_closed());
    println!("  ✓ ResultSet OK");
    println!();
}

fn demo_task_runner() {
    use std::time::Duration;
    use driftbrowser::tasks::TaskRunner;
    section("Task Runner");

    let runner = TaskRunner::new();

    runner.submit(
        || Ok::<u32, String>(2 + 2),
        |result| println!("  Background sum arrived: {:?}", result),
    );
    let ran = runner.run_next(Duration::from_secs(5));
    println!("  Drained one completion: {}", ran);

    for i in 1..=3 {
        runner.submit_ordered(
            "demo:lane",
            move || Ok::<u32, String>(i),
            move |result| println!("  Lane task {} completed: {:?}", i, result),
        );
    }
    let mut drained = 0;
    while drained < 3 && runner.run_next(Duration::from_secs(5)) {
        drained += 1;
    }
    println!("  Ordered lane delivered {} completions in order", drained);

    let (gate_tx, gate_rx) = crossbeam_channel::bounded::<()>(1);
    let token = runner.submit(
        move || -> Result<u32, String> {
            let _ = gate_rx.recv();
            Ok(7)
        },
        |result| println!("  Cancelled completion ran anyway: {:?}", result),
    );
    token.cancel();
    gate_tx.send(()).unwrap();
    let ran = runner.run_next(Duration::from_millis(300));
    println!("  Completion after cancel: ran = {}", ran);
    println!("  ✓ TaskRunner OK");
    println!();
}

fn demo_list_binding() {
    use std::sync::Arc;
    use driftbrowser::binding::{EmptyStateObserver, HistoryBinder, ListBinding};
    use driftbrowser::database::connection::Database;
    use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait};
    section("List Binding");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = RecordStore::new(db);
    store.upsert_history("Rust", "https://rust-lang.org", 1_700_000_000_000).unwrap();
    store.upsert_history("Crates", "https://crates.io", 1_700_000_200_000).unwrap();
    store.upsert_history("Docs", "https://docs.rs", 1_700_000_400_000).unwrap();

    let mut binding: ListBinding<HistoryBinder> = ListBinding::new();
    let observer = Arc::new(EmptyStateObserver::new());
    binding.register_observer(&observer);
    println!("  Before first swap: empty placeholder = {}", observer.is_empty_visible());

    let results = store.query(RecordKind::History, None).unwrap();
    binding.swap(Some(Arc::new(results)));
    println!("  Bound {} rows, placeholder = {}", binding.count(), observer.is_empty_visible());

    let top = binding.item_at(0).unwrap();
    println!("  Top row: '{}' (id {})", top.title, binding.item_id(0));

    let hidden_id = binding.item_id(1);
    binding.hide_id(hidden_id);
    println!("  Hid row {}: visible count = {}", hidden_id, binding.count());
    println!("  New row at position 1: '{}'", binding.item_at(1).unwrap().title);

    binding.swap(None);
    println!("  Unbound: count = {}, placeholder = {}", binding.count(), observer.is_empty_visible());
    println!("  ✓ ListBinding OK");
    println!();
}

fn demo_session() {
    use std::sync::Arc;
    use std::time::Duration;
    use driftbrowser::database::connection::Database;
    use driftbrowser::services::session::{BrowsingSession, BrowsingSessionTrait};
    use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait};
    use driftbrowser::tasks::TaskRunner;
    section("Browsing Session");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = Arc::new(RecordStore::new(db));
    let runner = Arc::new(TaskRunner::new());

    let session = BrowsingSession::new(store.clone(), runner.clone(), false);
    session.load_url("https://rust-lang.org");
    session.on_title_received("Rust Programming Language");
    runner.run_next(Duration::from_secs(5));
    println!(
        "  Title arrival recorded {} history row(s)",
        store.count(RecordKind::History).unwrap()
    );

    let incognito = BrowsingSession::new(store.clone(), runner.clone(), true);
    incognito.load_url("https://private.example");
    incognito.on_title_received("Private Page");
    println!(
        "  Incognito session left history at {} row(s)",
        store.count(RecordKind::History).unwrap()
    );
    println!("  ✓ BrowsingSession OK");
    println!();
}

fn demo_undo_delete() {
    use std::sync::Arc;
    use std::time::Duration;
    use driftbrowser::database::connection::Database;
    use driftbrowser::services::undo_delete::UndoDeleteCoordinator;
    use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait, RecordValues};
    use driftbrowser::tasks::TaskRunner;
    section("Delete with Undo");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = Arc::new(RecordStore::new(db));
    let runner = Arc::new(TaskRunner::new());
    let undo = UndoDeleteCoordinator::new(store.clone(), runner.clone(), Duration::from_millis(2750));

    let id = store
        .upsert_history("Example", "https://example.com", 1_700_000_000_000)
        .unwrap();
    let values = RecordValues::History {
        title: "Example".to_string(),
        url: "https://example.com".to_string(),
        timestamp: 1_700_000_000_000,
    };

    let ticket = undo.delete_with_undo(id, values);
    runner.run_next(Duration::from_secs(5));
    println!(
        "  Deleted row {}: history now {} row(s)",
        ticket.deleted_id(),
        store.count(RecordKind::History).unwrap()
    );

    let restored = undo.undo(ticket);
    runner.run_next(Duration::from_secs(5));
    let results = store.query(RecordKind::History, None).unwrap();
    results.advance();
    let new_id = results.i64_value(results.column_index("_id")).unwrap();
    println!("  Undo accepted: {}, restored as fresh row {} (> {})", restored, new_id, id);
    println!("  ✓ UndoDeleteCoordinator OK");
    println!();
}

fn demo_clear_all() {
    use std::sync::Arc;
    use std::time::Duration;
    use driftbrowser::database::connection::Database;
    use driftbrowser::services::clear_all::{ClearAllCoordinator, ProgressSink};
    use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait};
    use driftbrowser::tasks::TaskRunner;
    section("Clear All");

    struct DemoProgress;
    impl ProgressSink for DemoProgress {
        fn show(&self) {
            println!("  [progress] shown");
        }
        fn dismiss(&self) {
            println!("  [progress] dismissed");
        }
    }

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = Arc::new(RecordStore::new(db));
    let runner = Arc::new(TaskRunner::new());
    let clear = ClearAllCoordinator::new(store.clone(), runner.clone(), Duration::from_millis(200));

    for i in 0..5 {
        store
            .upsert_history("Page", &format!("https://example.com/{}", i), 1_700_000_000_000 + i)
            .unwrap();
    }
    println!("  Seeded {} history rows", store.count(RecordKind::History).unwrap());

    clear.clear_all(RecordKind::History, Arc::new(DemoProgress));
    runner.run_next(Duration::from_secs(5));
    runner.run_next(Duration::from_secs(5));
    println!("  After clear: {} row(s)", store.count(RecordKind::History).unwrap());
    println!("  ✓ ClearAllCoordinator OK");
    println!();
}

fn demo_accent() {
    use driftbrowser::services::accent::{dominant_accent, resolve_accent, IconBitmap};
    use driftbrowser::types::favorite::TRANSPARENT;
    section("Favicon Accent");

    let icon = IconBitmap::new(2, 2, vec![0xff00_00ff, 0xff00_00ff, 0xff00_00ff, 0x0000_ffff]);
    let accent = dominant_accent(Some(&icon));
    println!("  Dominant accent of red-heavy icon: {:#010x}", accent);

    let missing = dominant_accent(None);
    println!("  No icon: {:#010x} (TRANSPARENT)", missing);

    let rendered = resolve_accent(TRANSPARENT, 0x2ea4_4fff);
    println!("  Rendered with default accent: {:#010x}", rendered);
    println!("  ✓ Accent extraction OK");
    println!();
}

fn demo_share() {
    use driftbrowser::services::share::ShareComposer;
    section("Share Composer");

    let cache = std::env::temp_dir().join("driftbrowser-demo-cache");
    let composer = ShareComposer::new(cache.clone(), true);

    let payload = composer.compose("Rust", "https://rust-lang.org", Some(b"fake png bytes"));
    println!("  Title: {}", payload.title);
    println!("  URL: {}", payload.url);
    match &payload.snapshot_path {
        Some(path) => println!("  Snapshot: {}", path.display()),
        None => println!("  Snapshot: none (text only)"),
    }

    let text_only = composer.compose("Rust", "https://rust-lang.org", None);
    println!("  Without snapshot bytes: attached = {}", text_only.snapshot_path.is_some());

    let _ = std::fs::remove_dir_all(&cache);
    println!("  ✓ ShareComposer OK");
    println!();
}

fn demo_permissions() {
    use driftbrowser::services::permissions::{PermissionGate, PermissionState};
    section("Permission Gate");

    let mut gate = PermissionGate::new();
    let denied = PermissionState::Denied {
        can_ask_again: true,
    };

    println!("  Granted -> {:?}", gate.evaluate(PermissionState::Granted));
    println!("  First denial -> {:?}", gate.evaluate(denied));
    println!("  Second denial -> {:?}", gate.evaluate(denied));
    println!(
        "  Permanent denial -> {:?}",
        gate.evaluate(PermissionState::Denied {
            can_ask_again: false,
        })
    );
    println!("  ✓ PermissionGate OK");
    println!();
}

fn demo_intent_router() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use driftbrowser::database::connection::Database;
    use driftbrowser::services::intent_router::{
        AcceptanceSignal, Destination, IntentRouter, ResolvedUrlEvent,
    };
    use driftbrowser::services::session::{BrowsingSession, BrowsingSessionTrait};
    use driftbrowser::store::RecordStore;
    use driftbrowser::tasks::TaskRunner;
    section("Intent Router");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = Arc::new(RecordStore::new(db));
    let runner = Arc::new(TaskRunner::new());
    let session = Arc::new(BrowsingSession::new(store, runner, false));
    let router = IntentRouter::new(session.clone());

    let signaled = Arc::new(AtomicBool::new(false));
    let flag = signaled.clone();
    let event = ResolvedUrlEvent::new(
        Some("https://rust-lang.org".to_string()),
        Destination::ThisBrowser,
        AcceptanceSignal::new(move || flag.store(true, Ordering::SeqCst)),
    );
    let outcome = router.handle(event);
    println!("  Routed to this browser: {:?}", outcome);
    println!("  Session now at: {:?}", session.current_url());
    println!("  Sender acknowledged: {}", signaled.load(Ordering::SeqCst));

    let event = ResolvedUrlEvent::new(
        Some("https://example.com/app".to_string()),
        Destination::External("com.example.app".to_string()),
        AcceptanceSignal::new(|| {}),
    );
    println!("  External destination: {:?}", router.handle(event));

    let event = ResolvedUrlEvent::new(None, Destination::ThisBrowser, AcceptanceSignal::new(|| {}));
    println!("  Event without URL: {:?}", router.handle(event));
    println!("  ✓ IntentRouter OK");
    println!();
}

fn demo_settings() {
    use driftbrowser::services::settings_store::{SettingsStore, SettingsStoreTrait};
    section("Settings Store");

    let mut store = SettingsStore::new(Some("demo_settings.json".to_string()));
    let settings = store.load().unwrap();
    println!("  Home page: {}", settings.general.home_page);
    println!("  Attach snapshot: {}", settings.sharing.attach_snapshot);
    println!("  Undo window: {} ms", settings.lists.undo_window_ms);
    println!("  Clear-all floor: {} ms", settings.lists.clear_all_floor_ms);
    println!("  Default accent: {:#010x}", settings.appearance.default_accent);

    store.set_value("lists.undo_window_ms", serde_json::json!(4000)).unwrap();
    println!("  Changed undo window to: {} ms", store.get_settings().lists.undo_window_ms);

    store.reset().unwrap();
    println!("  Reset to defaults: undo window = {} ms", store.get_settings().lists.undo_window_ms);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsStore OK");
    println!();
}

fn demo_app_core() {
    use driftbrowser::app::App;
    section("App Core (full lifecycle)");

    let mut app = App::new(":memory:").unwrap();
    println!("  Initialized App with store, runner, and services");

    app.startup();
    println!("  Startup sequence: settings → stored row counts");

    app.shutdown();
    println!("  Shutdown sequence: drained pending completions");
    println!("  ✓ App Core OK");
}
