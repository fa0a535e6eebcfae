//! Property-based tests for history upserts.
//!
//! These tests verify that repeated visits to the same URL always collapse
//! onto a single row that keeps its id and carries the latest title and
//! timestamp, for arbitrary valid URLs and titles.

use driftbrowser::database::Database;
use driftbrowser::store::{RecordKind, RecordStore, RecordStoreTrait};
use proptest::prelude::*;
use std::sync::Arc;

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
/// Uses printable ASCII characters to avoid encoding edge cases.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

// One row per URL
//
// *For any* valid URL and any two titles and timestamps, upserting the URL
// twice SHALL leave exactly one history row, with the id of the first
// upsert and the values of the second.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn upsert_same_url_keeps_one_row_with_latest_values(
        url in arb_url(),
        first_title in arb_title(),
        second_title in arb_title(),
        first_ts in 0i64..1_000_000,
        second_ts in 0i64..1_000_000,
    ) {
        // Set up a fresh in-memory database for each test case
        let db = Arc::new(Database::open_in_memory()
            .expect("Failed to open in-memory database"));
        let store = RecordStore::new(db);

        let first_id = store
            .upsert_history(&first_title, &url, first_ts)
            .expect("upsert_history should succeed for valid inputs");
        let second_id = store
            .upsert_history(&second_title, &url, second_ts)
            .expect("repeat upsert_history should succeed");

        prop_assert_eq!(
            first_id,
            second_id,
            "A repeat visit must keep the existing row id"
        );
        prop_assert_eq!(
            store.count(RecordKind::History).unwrap(),
            1,
            "Upserting the same URL twice must not grow the table"
        );

        // The surviving row carries the second visit's values
        let results = store.query(RecordKind::History, None).unwrap();
        prop_assert!(results.advance(), "The single row should be readable");
        prop_assert_eq!(
            results.text_value(results.column_index("title")),
            Some(second_title)
        );
        prop_assert_eq!(
            results.text_value(results.column_index("url")),
            Some(url)
        );
        prop_assert_eq!(
            results.i64_value(results.column_index("timestamp")),
            Some(second_ts)
        );
    }
}
