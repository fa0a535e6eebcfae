//! Page sharing for DriftBrowser.
//!
//! Composes the payload handed to the platform share surface: page title,
//! URL, and optionally a snapshot image written to the cache directory.
//! Any snapshot failure degrades the share to text only; sharing itself
//! never fails.

use std::fs;
use std::path::PathBuf;

use crate::store::now_millis;

/// What gets handed to the platform share surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub url: String,
    pub snapshot_path: Option<PathBuf>,
}

/// Builds share payloads, persisting snapshots under the cache directory.
pub struct ShareComposer {
    cache_dir: PathBuf,
    attach_snapshot: bool,
}

impl ShareComposer {
    pub fn new(cache_dir: PathBuf, attach_snapshot: bool) -> Self {
        Self {
            cache_dir,
            attach_snapshot,
        }
    }

    /// Composes a payload for the page. The snapshot is attached only when
    /// snapshot sharing is enabled, `snapshot` bytes are present, and the
    /// write succeeds.
    pub fn compose(&self, title: &str, url: &str, snapshot: Option<&[u8]>) -> SharePayload {
        let snapshot_path = if self.attach_snapshot {
            snapshot.and_then(|bytes| self.write_snapshot(bytes))
        } else {
            None
        };
        SharePayload {
            title: title.to_string(),
            url: url.to_string(),
            snapshot_path,
        }
    }

    fn write_snapshot(&self, bytes: &[u8]) -> Option<PathBuf> {
        let dir = self.cache_dir.join("share");
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn!(
                "Could not create snapshot directory: {}; sharing text only",
                e
            );
            return None;
        }
        let path = dir.join(format!("page-{}.png", now_millis()));
        if let Err(e) = fs::write(&path, bytes) {
            log::warn!("Could not write page snapshot: {}; sharing text only", e);
            return None;
        }
        Some(path)
    }
}
