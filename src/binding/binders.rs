//! Row binders for DriftBrowser.
//!
//! A binder maps the current row of a result set to one typed item. Column
//! indices are resolved once per swap by the owning [`ListBinding`] and
//! passed back in on every bind.
//!
//! [`ListBinding`]: super::ListBinding

use crate::store::ResultSet;
use crate::types::favorite::FavoriteEntry;
use crate::types::history::HistoryEntry;

/// Maps positioned result-set rows to typed items.
pub trait RowBinder {
    type Item;

    /// Columns this binder reads. `bind` receives their resolved indices in
    /// the same order.
    fn required_columns() -> &'static [&'static str];

    /// Reads the current row. Returns `None` when the set is closed or not
    /// positioned on a row.
    fn bind(results: &ResultSet, columns: &[usize]) -> Option<Self::Item>;
}

/// Binds history rows to [`HistoryEntry`] items.
pub struct HistoryBinder;

impl RowBinder for HistoryBinder {
    type Item = HistoryEntry;

    fn required_columns() -> &'static [&'static str] {
        &["_id", "title", "url", "timestamp"]
    }

    fn bind(results: &ResultSet, columns: &[usize]) -> Option<HistoryEntry> {
        Some(HistoryEntry {
            id: results.i64_value(columns[0])?,
            title: results.text_value(columns[1])?,
            url: results.text_value(columns[2])?,
            timestamp: results.i64_value(columns[3])?,
        })
    }
}

/// Binds favorite rows to [`FavoriteEntry`] items.
pub struct FavoriteBinder;

impl RowBinder for FavoriteBinder {
    type Item = FavoriteEntry;

    fn required_columns() -> &'static [&'static str] {
        &["_id", "title", "url", "color"]
    }

    fn bind(results: &ResultSet, columns: &[usize]) -> Option<FavoriteEntry> {
        Some(FavoriteEntry {
            id: results.i64_value(columns[0])?,
            title: results.text_value(columns[1])?,
            url: results.text_value(columns[2])?,
            color: results.i64_value(columns[3])? as u32,
        })
    }
}
