use serde::{Deserialize, Serialize};

/// Sentinel accent value meaning "no color was computed for this favorite".
///
/// Stored verbatim; consumers substitute a default accent at render time
/// via [`crate::services::accent::resolve_accent`].
pub const TRANSPARENT: u32 = 0;

/// Represents a user-pinned page.
///
/// Unlike history, favorites carry no uniqueness constraint: pinning the
/// same URL twice stores two rows with distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Packed RGBA accent color derived from the page icon, or
    /// [`TRANSPARENT`] when none was available.
    pub color: u32,
}
