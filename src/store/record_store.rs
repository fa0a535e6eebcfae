//! Record Store for DriftBrowser.
//!
//! Implements `RecordStoreTrait` — the single query/mutation interface over
//! the history and favorites tables, backed by SQLite via `rusqlite`.
//! History upserts run as one conflict-clause statement so two concurrent
//! upserts of the same URL can never produce two rows.

use rusqlite::params;
use rusqlite::types::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::database::connection::Database;
use crate::types::errors::StoreError;
use crate::types::favorite::FavoriteEntry;
use crate::types::history::HistoryEntry;

use super::result_set::ResultSet;

/// The two persisted record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    History,
    Favorites,
}

impl RecordKind {
    /// Table backing this kind.
    pub fn table(self) -> &'static str {
        match self {
            RecordKind::History => "history",
            RecordKind::Favorites => "favorites",
        }
    }

    /// Canonical column projection for this kind, `_id` first.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            RecordKind::History => &["_id", "title", "url", "timestamp"],
            RecordKind::Favorites => &["_id", "title", "url", "color"],
        }
    }

    /// Order used when a query does not ask for one.
    pub fn default_order(self) -> SortOrder {
        match self {
            RecordKind::History => SortOrder::NewestFirst,
            RecordKind::Favorites => SortOrder::InsertionOrder,
        }
    }

    /// Key of the ordered task lane that serializes mutations of one URL.
    pub fn mutation_lane(self, url: &str) -> String {
        format!("{}:{}", self.table(), url)
    }
}

/// Row ordering for store queries.
///
/// The timestamp orderings apply to history; favorites carry no timestamp
/// and list in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// `timestamp` descending, ties broken by insertion order.
    NewestFirst,
    OldestFirst,
    InsertionOrder,
}

impl SortOrder {
    fn sql_clause(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "timestamp DESC, _id ASC",
            SortOrder::OldestFirst => "timestamp ASC, _id ASC",
            SortOrder::InsertionOrder => "_id ASC",
        }
    }
}

/// The storable fields of one row, without its identifier.
///
/// Captured before an undoable delete and replayed on undo; the store
/// assigns a fresh id on re-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValues {
    History {
        title: String,
        url: String,
        timestamp: i64,
    },
    Favorite {
        title: String,
        url: String,
        color: u32,
    },
}

impl RecordValues {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordValues::History { .. } => RecordKind::History,
            RecordValues::Favorite { .. } => RecordKind::Favorites,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            RecordValues::History { url, .. } => url,
            RecordValues::Favorite { url, .. } => url,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            RecordValues::History { title, .. } => title,
            RecordValues::Favorite { title, .. } => title,
        }
    }
}

impl From<HistoryEntry> for RecordValues {
    fn from(entry: HistoryEntry) -> Self {
        RecordValues::History {
            title: entry.title,
            url: entry.url,
            timestamp: entry.timestamp,
        }
    }
}

impl From<FavoriteEntry> for RecordValues {
    fn from(entry: FavoriteEntry) -> Self {
        RecordValues::Favorite {
            title: entry.title,
            url: entry.url,
            color: entry.color,
        }
    }
}

/// Returns the current UNIX timestamp in milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Trait defining the record store operations.
pub trait RecordStoreTrait {
    fn query(&self, kind: RecordKind, order: Option<SortOrder>) -> Result<ResultSet, StoreError>;
    fn insert(&self, values: &RecordValues) -> Result<i64, StoreError>;
    fn upsert_history(&self, title: &str, url: &str, timestamp: i64) -> Result<i64, StoreError>;
    fn insert_favorite(&self, title: &str, url: &str, color: u32) -> Result<i64, StoreError>;
    /// Deletes one row by id. Returns `Ok(false)` when no such row exists.
    fn delete_one(&self, kind: RecordKind, id: i64) -> Result<bool, StoreError>;
    /// Deletes every row of the kind. Returns the number of rows removed.
    fn delete_all(&self, kind: RecordKind) -> Result<usize, StoreError>;
    fn count(&self, kind: RecordKind) -> Result<usize, StoreError>;
}

/// Record store backed by the shared SQLite database.
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Creates a new `RecordStore` over the shared database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl RecordStoreTrait for RecordStore {
    /// Runs an ordered query and snapshots the matching rows into a
    /// [`ResultSet`] bound to the kind's canonical columns.
    fn query(&self, kind: RecordKind, order: Option<SortOrder>) -> Result<ResultSet, StoreError> {
        let order = order.unwrap_or_else(|| kind.default_order());
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            kind.columns().join(", "),
            kind.table(),
            order.sql_clause()
        );

        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        let column_count = stmt.column_count();

        let mut data = Vec::new();
        let mut rows = stmt
            .query([])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        while let Some(row) = rows
            .next()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?
        {
            let mut record = Vec::with_capacity(column_count);
            for i in 0..column_count {
                let value: Value = row
                    .get(i)
                    .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
                record.push(value);
            }
            data.push(record);
        }

        let columns = kind.columns().iter().map(|c| c.to_string()).collect();
        Ok(ResultSet::new(columns, data))
    }

    /// Inserts captured values back into their table. History values route
    /// through the upsert so the one-row-per-url invariant holds on every
    /// insertion path.
    fn insert(&self, values: &RecordValues) -> Result<i64, StoreError> {
        match values {
            RecordValues::History {
                title,
                url,
                timestamp,
            } => self.upsert_history(title, url, *timestamp),
            RecordValues::Favorite { title, url, color } => {
                self.insert_favorite(title, url, *color)
            }
        }
    }

    /// Inserts or updates the history row for `url` in a single statement,
    /// returning the row id. An existing row keeps its id; only `title`
    /// and `timestamp` change.
    fn upsert_history(&self, title: &str, url: &str, timestamp: i64) -> Result<i64, StoreError> {
        self.db
            .connection()
            .query_row(
                "INSERT INTO history (title, url, timestamp) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(url) DO UPDATE SET title = excluded.title, timestamp = excluded.timestamp \
                 RETURNING _id",
                params![title, url, timestamp],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }

    /// Inserts a favorite row and returns its id. Favorites have no
    /// uniqueness constraint, so repeated pins of one URL each get a row.
    fn insert_favorite(&self, title: &str, url: &str, color: u32) -> Result<i64, StoreError> {
        let conn = self.db.connection();
        conn.execute(
            "INSERT INTO favorites (title, url, color) VALUES (?1, ?2, ?3)",
            params![title, url, color],
        )
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    }

    /// Deletes a single row by id; deleting an absent row is a no-op.
    fn delete_one(&self, kind: RecordKind, id: i64) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE _id = ?1", kind.table());
        let affected = self
            .db
            .connection()
            .execute(&sql, params![id])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(affected > 0)
    }

    /// Deletes every row of the kind; returns only after the commit.
    fn delete_all(&self, kind: RecordKind) -> Result<usize, StoreError> {
        let sql = format!("DELETE FROM {}", kind.table());
        self.db
            .connection()
            .execute(&sql, [])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }

    fn count(&self, kind: RecordKind) -> Result<usize, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = self
            .db
            .connection()
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(count as usize)
    }
}
