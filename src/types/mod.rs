// DriftBrowser shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod favorite;
pub mod history;
pub mod settings;
