//! Unit tests for bulk clearing.
//!
//! Uses a counting progress sink to verify the show/dismiss protocol and
//! the minimum indicator duration.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use driftbrowser::database::Database;
use driftbrowser::services::clear_all::{ClearAllCoordinator, ProgressSink};
use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait};
use driftbrowser::tasks::TaskRunner;

struct CountingSink {
    shown: AtomicUsize,
    dismissed: AtomicUsize,
}

impl CountingSink {
    fn new() -> Self {
        Self {
            shown: AtomicUsize::new(0),
            dismissed: AtomicUsize::new(0),
        }
    }

    fn shown(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }

    fn dismissed(&self) -> usize {
        self.dismissed.load(Ordering::SeqCst)
    }
}

impl ProgressSink for CountingSink {
    fn show(&self) {
        self.shown.fetch_add(1, Ordering::SeqCst);
    }

    fn dismiss(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
    }
}

fn setup(floor: Duration) -> (Arc<RecordStore>, Arc<TaskRunner>, ClearAllCoordinator) {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let store = Arc::new(RecordStore::new(db));
    let runner = Arc::new(TaskRunner::new());
    let coordinator = ClearAllCoordinator::new(store.clone(), runner.clone(), floor);
    (store, runner, coordinator)
}

/// Clearing empties the table and dismisses the indicator exactly once.
#[test]
fn test_clear_all_empties_table_and_dismisses() {
    let (store, runner, coordinator) = setup(Duration::from_millis(50));
    for i in 0..4 {
        store
            .upsert_history(&format!("Page {}", i), &format!("https://p{}.example", i), i)
            .unwrap();
    }
    let sink = Arc::new(CountingSink::new());

    coordinator.clear_all(RecordKind::History, sink.clone());
    assert_eq!(sink.shown(), 1, "Indicator should show immediately");

    // First completion logs the delete; the floor holdback delivers the
    // dismissal as a second completion.
    assert!(runner.run_next(Duration::from_secs(5)));
    assert!(runner.run_next(Duration::from_secs(5)));

    assert_eq!(store.count(RecordKind::History).unwrap(), 0);
    assert_eq!(sink.dismissed(), 1);
    assert!(!runner.run_next(Duration::from_millis(200)));
}

/// The indicator stays up for at least the floor duration.
#[test]
fn test_dismissal_respects_floor() {
    let (store, runner, coordinator) = setup(Duration::from_millis(150));
    store
        .upsert_history("Page", "https://p.example", 1)
        .unwrap();
    let sink = Arc::new(CountingSink::new());

    let started = Instant::now();
    coordinator.clear_all(RecordKind::History, sink.clone());
    while sink.dismissed() == 0 {
        assert!(
            runner.run_next(Duration::from_secs(5)),
            "Dismissal should arrive through the completion queue"
        );
    }

    assert!(
        started.elapsed() >= Duration::from_millis(150),
        "Indicator dismissed after {:?}, before the floor elapsed",
        started.elapsed()
    );
    assert_eq!(sink.dismissed(), 1);
}

/// A zero floor dismisses on the first completion.
#[test]
fn test_zero_floor_dismisses_immediately() {
    let (store, runner, coordinator) = setup(Duration::ZERO);
    store
        .upsert_history("Page", "https://p.example", 1)
        .unwrap();
    let sink = Arc::new(CountingSink::new());

    coordinator.clear_all(RecordKind::History, sink.clone());
    assert!(runner.run_next(Duration::from_secs(5)));

    assert_eq!(sink.dismissed(), 1);
    assert!(!runner.run_next(Duration::from_millis(200)));
}

/// Clearing one kind leaves the other kind's rows alone.
#[test]
fn test_clear_all_is_scoped_to_kind() {
    let (store, runner, coordinator) = setup(Duration::ZERO);
    store
        .upsert_history("Page", "https://p.example", 1)
        .unwrap();
    store
        .insert_favorite("Docs", "https://docs.example", 0)
        .unwrap();
    let sink = Arc::new(CountingSink::new());

    coordinator.clear_all(RecordKind::History, sink.clone());
    assert!(runner.run_next(Duration::from_secs(5)));

    assert_eq!(store.count(RecordKind::History).unwrap(), 0);
    assert_eq!(store.count(RecordKind::Favorites).unwrap(), 1);
}

/// Clearing an already-empty table still shows and dismisses the indicator.
#[test]
fn test_clear_all_on_empty_table() {
    let (_store, runner, coordinator) = setup(Duration::ZERO);
    let sink = Arc::new(CountingSink::new());

    coordinator.clear_all(RecordKind::Favorites, sink.clone());
    assert!(runner.run_next(Duration::from_secs(5)));

    assert_eq!(sink.shown(), 1);
    assert_eq!(sink.dismissed(), 1);
}
