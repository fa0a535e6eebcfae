// DriftBrowser list binding
//
// Bridges store result sets to position-indexed list consumers: typed row
// binders, stable item ids, visibility masking for pending deletes, and
// dataset-change observation.

pub mod binders;
pub mod empty_state;
pub mod list_binding;

pub use binders::{FavoriteBinder, HistoryBinder, RowBinder};
pub use empty_state::EmptyStateObserver;
pub use list_binding::{DatasetObserver, ListBinding, NO_ID};
