//! List binding for DriftBrowser.
//!
//! Owns the result-set snapshot a list renders from. Consumers address rows
//! by visible position; the binding translates positions through its hidden
//! set, resolves stable item ids, and tells registered observers whenever
//! the visible dataset changes. Swapping in a fresh snapshot closes the
//! previous one.

use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use crate::store::ResultSet;

use super::binders::RowBinder;

/// Id reported for positions that no longer resolve to a row.
pub const NO_ID: i64 = -1;

/// Receives visible-count updates from a [`ListBinding`].
pub trait DatasetObserver {
    fn on_dataset_changed(&self, count: usize);
}

/// Position-indexed view over a result-set snapshot.
pub struct ListBinding<B: RowBinder> {
    results: Option<Arc<ResultSet>>,
    columns: Vec<usize>,
    id_column: usize,
    observers: Vec<Weak<dyn DatasetObserver>>,
    hidden: HashSet<i64>,
    _binder: PhantomData<B>,
}

impl<B: RowBinder> ListBinding<B> {
    pub fn new() -> Self {
        Self {
            results: None,
            columns: Vec::new(),
            id_column: 0,
            observers: Vec::new(),
            hidden: HashSet::new(),
            _binder: PhantomData,
        }
    }

    /// Installs a new snapshot and closes the old one.
    ///
    /// Swapping in the snapshot already installed, or `None` over `None`,
    /// is a no-op. A real swap clears the hidden set and notifies
    /// observers.
    ///
    /// # Panics
    ///
    /// Panics if the new snapshot lacks a column the binder requires.
    pub fn swap(&mut self, new_results: Option<Arc<ResultSet>>) {
        match (&self.results, &new_results) {
            (None, None) => return,
            (Some(old), Some(new)) if Arc::ptr_eq(old, new) => return,
            _ => {}
        }

        let old = self.results.take();
        self.columns = Vec::new();
        self.id_column = 0;
        if let Some(results) = &new_results {
            self.columns = B::required_columns()
                .iter()
                .map(|name| results.column_index(name))
                .collect();
            self.id_column = results.column_index("_id");
        }
        self.results = new_results;
        self.hidden.clear();

        if let Some(old) = old {
            old.close();
        }
        self.notify_changed();
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    /// Number of visible rows: snapshot rows minus hidden ones.
    pub fn count(&self) -> usize {
        match &self.results {
            Some(results) => results.count().saturating_sub(self.hidden.len()),
            None => 0,
        }
    }

    /// Stable id of the row at a visible position, or [`NO_ID`] when the
    /// position no longer resolves.
    pub fn item_id(&self, position: usize) -> i64 {
        let results = match &self.results {
            Some(results) => results,
            None => return NO_ID,
        };
        let underlying = match self.resolve_position(results, position) {
            Some(underlying) => underlying,
            None => return NO_ID,
        };
        if !results.move_to(underlying) {
            return NO_ID;
        }
        results.i64_value(self.id_column).unwrap_or(NO_ID)
    }

    /// Typed item at a visible position.
    pub fn item_at(&self, position: usize) -> Option<B::Item> {
        let results = self.results.as_ref()?;
        let underlying = self.resolve_position(results, position)?;
        if !results.move_to(underlying) {
            return None;
        }
        B::bind(results, &self.columns)
    }

    /// Hides the row with `id` from every position-indexed accessor, as if
    /// it were already deleted. Returns whether anything changed; hiding an
    /// id that is absent or already hidden does nothing.
    pub fn hide_id(&mut self, id: i64) -> bool {
        if self.hidden.contains(&id) {
            return false;
        }
        let present = match &self.results {
            Some(results) => self.contains_id(results, id),
            None => false,
        };
        if !present {
            return false;
        }
        self.hidden.insert(id);
        self.notify_changed();
        true
    }

    /// Registers an observer. The binding keeps only a weak reference;
    /// dropped observers are pruned on the next notification.
    pub fn register_observer<O>(&mut self, observer: &Arc<O>)
    where
        O: DatasetObserver + 'static,
    {
        let weak = Arc::downgrade(observer);
        let weak: Weak<dyn DatasetObserver> = weak;
        self.observers.push(weak);
    }

    fn notify_changed(&mut self) {
        let count = self.count();
        self.observers.retain(|observer| match observer.upgrade() {
            Some(observer) => {
                observer.on_dataset_changed(count);
                true
            }
            None => false,
        });
    }

    /// Maps a visible position to the underlying snapshot position,
    /// skipping hidden rows.
    fn resolve_position(&self, results: &ResultSet, visible: usize) -> Option<usize> {
        if self.hidden.is_empty() {
            if visible < results.count() {
                return Some(visible);
            }
            return None;
        }

        let mut remaining = visible;
        for underlying in 0..results.count() {
            if !results.move_to(underlying) {
                return None;
            }
            let id = results.i64_value(self.id_column)?;
            if self.hidden.contains(&id) {
                continue;
            }
            if remaining == 0 {
                return Some(underlying);
            }
            remaining -= 1;
        }
        None
    }

    fn contains_id(&self, results: &ResultSet, id: i64) -> bool {
        for underlying in 0..results.count() {
            if results.move_to(underlying) && results.i64_value(self.id_column) == Some(id) {
                return true;
            }
        }
        false
    }
}

impl<B: RowBinder> Default for ListBinding<B> {
    fn default() -> Self {
        Self::new()
    }
}
