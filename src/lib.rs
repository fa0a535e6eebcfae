//! DriftBrowser — the persistence and list-synchronization core of a
//! minimal mobile-style web browser.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod binding;
pub mod database;
pub mod platform;
pub mod services;
pub mod store;
pub mod tasks;
pub mod types;
