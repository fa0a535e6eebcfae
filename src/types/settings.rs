use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub sharing: SharingSettings,
    pub lists: ListSettings,
    pub appearance: AppearanceSettings,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            sharing: SharingSettings::default(),
            lists: ListSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

/// General browser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub home_page: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_page: "https://start.duckduckgo.com".to_string(),
        }
    }
}

/// Page-sharing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharingSettings {
    /// Attach a page snapshot to the share payload when one is available.
    pub attach_snapshot: bool,
}

impl Default for SharingSettings {
    fn default() -> Self {
        Self {
            attach_snapshot: true,
        }
    }
}

/// Tunables for the list views backed by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListSettings {
    /// How long a completed delete stays reversible, in milliseconds.
    pub undo_window_ms: u64,
    /// Minimum visible duration of the clear-all progress indicator,
    /// in milliseconds.
    pub clear_all_floor_ms: u64,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            undo_window_ms: 2750,
            clear_all_floor_ms: 1000,
        }
    }
}

/// Appearance and visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    /// Packed RGBA accent used when a favorite stored no color of its own.
    pub default_accent: u32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            default_accent: 0x2ea4_4fff,
        }
    }
}
