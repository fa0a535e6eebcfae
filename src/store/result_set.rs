//! Positional result handle for DriftBrowser store queries.
//!
//! A [`ResultSet`] owns a snapshot of the rows a query matched, bound to a
//! fixed column schema. Consumers position it row by row and read values
//! through column indices resolved once by name. Release is deterministic:
//! `close()` marks the handle, and the row memory is freed when the last
//! reference drops.

use rusqlite::types::Value;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Snapshot of a query result with cursor-style positioning.
///
/// Positioning uses interior mutability so a handle shared through `Arc`
/// (list bindings keep one this way) can still be iterated. A closed handle
/// answers every positional read with `None` and reports a count of zero;
/// it never panics for being closed. Looking up a column name that is not
/// part of the schema, by contrast, is a programming error and panics.
pub struct ResultSet {
    handle_id: u64,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    /// Current row, -1 before the first `move_to`/`advance`.
    position: AtomicI64,
    closed: AtomicBool,
}

impl ResultSet {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            handle_id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
            columns,
            rows,
            position: AtomicI64::new(-1),
            closed: AtomicBool::new(false),
        }
    }

    /// Process-unique identifier of this handle, for logging.
    pub fn handle_id(&self) -> u64 {
        self.handle_id
    }

    /// Number of rows in the snapshot; zero once the handle is closed.
    pub fn count(&self) -> usize {
        if self.is_closed() {
            0
        } else {
            self.rows.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Names of the columns this handle was queried with, in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Resolves a column name to its index.
    ///
    /// # Panics
    /// Panics if the column is not part of this result's schema.
    pub fn column_index(&self, name: &str) -> usize {
        match self.try_column_index(name) {
            Some(index) => index,
            None => panic!(
                "column '{}' does not exist in result set (columns: {:?})",
                name, self.columns
            ),
        }
    }

    /// Resolves a column name to its index, or `None` if absent.
    pub fn try_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Positions the handle on `position`. Returns `false` when the handle
    /// is closed or the position is out of range, leaving the current
    /// position untouched.
    pub fn move_to(&self, position: usize) -> bool {
        if self.is_closed() || position >= self.rows.len() {
            return false;
        }
        self.position.store(position as i64, Ordering::SeqCst);
        true
    }

    /// Advances to the next row. Returns `false` past the last row or on a
    /// closed handle.
    pub fn advance(&self) -> bool {
        if self.is_closed() {
            return false;
        }
        let next = self.position.load(Ordering::SeqCst) + 1;
        if (next as usize) < self.rows.len() {
            self.position.store(next, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Current position, -1 when unpositioned.
    pub fn position(&self) -> i64 {
        self.position.load(Ordering::SeqCst)
    }

    fn current_row(&self) -> Option<&Vec<Value>> {
        if self.is_closed() {
            return None;
        }
        let position = self.position.load(Ordering::SeqCst);
        if position < 0 {
            return None;
        }
        self.rows.get(position as usize)
    }

    /// Integer value of `column` at the current position.
    ///
    /// `None` when the handle is closed, unpositioned, or the value is not
    /// an integer.
    pub fn i64_value(&self, column: usize) -> Option<i64> {
        match self.current_row()?.get(column)? {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Text value of `column` at the current position.
    pub fn text_value(&self, column: usize) -> Option<String> {
        match self.current_row()?.get(column)? {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Marks the handle closed. All subsequent positional reads answer
    /// `None` and `count()` reports zero. Idempotent.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultSet")
            .field("handle_id", &self.handle_id)
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
