// DriftBrowser record store
// The only door to the persisted records: ordered queries returning a
// positional result handle, the atomic history upsert, favorite inserts,
// and single-row / bulk deletes.

pub mod record_store;
pub mod result_set;

pub use record_store::{now_millis, RecordKind, RecordStore, RecordStoreTrait, RecordValues, SortOrder};
pub use result_set::ResultSet;
