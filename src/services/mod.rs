// DriftBrowser services
// Services provide core functionality: browsing session, undoable deletes, bulk clearing, sharing, settings, etc.

pub mod accent;
pub mod clear_all;
pub mod intent_router;
pub mod permissions;
pub mod session;
pub mod settings_store;
pub mod share;
pub mod undo_delete;
