//! Property-based tests for the delete/undo round trip.
//!
//! These tests verify that deleting a history row and undoing within the
//! window always restores the captured values under a fresh id, for
//! arbitrary valid URLs, titles, and timestamps.

use driftbrowser::database::Database;
use driftbrowser::services::undo_delete::UndoDeleteCoordinator;
use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait, RecordValues};
use driftbrowser::tasks::TaskRunner;
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Strategy for generating valid URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating non-empty page titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

// Delete-then-undo restores the row
//
// *For any* valid history values, deleting the row and undoing within the
// window SHALL restore a row with identical title, URL, and timestamp, and
// an id strictly greater than the deleted one.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn delete_then_undo_restores_values_under_fresh_id(
        url in arb_url(),
        title in arb_title(),
        timestamp in 0i64..1_000_000,
    ) {
        let db = Arc::new(Database::open_in_memory()
            .expect("Failed to open in-memory database"));
        let store = Arc::new(RecordStore::new(db));
        let runner = Arc::new(TaskRunner::new());
        let coordinator = UndoDeleteCoordinator::new(
            store.clone(),
            runner.clone(),
            Duration::from_secs(30),
        );

        let id = store
            .upsert_history(&title, &url, timestamp)
            .expect("upsert_history should succeed for valid inputs");
        let ticket = coordinator.delete_with_undo(
            id,
            RecordValues::History {
                title: title.clone(),
                url: url.clone(),
                timestamp,
            },
        );
        prop_assert!(runner.run_next(Duration::from_secs(5)));
        prop_assert_eq!(store.count(RecordKind::History).unwrap(), 0);

        prop_assert!(coordinator.undo(ticket));
        prop_assert!(runner.run_next(Duration::from_secs(5)));

        prop_assert_eq!(store.count(RecordKind::History).unwrap(), 1);
        let results = store.query(RecordKind::History, None).unwrap();
        prop_assert!(results.advance());
        let restored_id = results.i64_value(results.column_index("_id")).unwrap();
        prop_assert!(
            restored_id > id,
            "Restored row must get a fresh id: {} is not greater than {}",
            restored_id,
            id
        );
        prop_assert_eq!(
            results.text_value(results.column_index("title")),
            Some(title)
        );
        prop_assert_eq!(
            results.text_value(results.column_index("url")),
            Some(url)
        );
        prop_assert_eq!(
            results.i64_value(results.column_index("timestamp")),
            Some(timestamp)
        );
    }
}
