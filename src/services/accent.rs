//! Favicon accent extraction for DriftBrowser.
//!
//! Favorites carry an accent color derived from the page icon at pin time.
//! Extraction buckets opaque pixels by coarse color family, then averages
//! the dominant family. Icons with no opaque pixels yield [`TRANSPARENT`],
//! which renderers substitute with the configured default accent.

use std::collections::BTreeMap;

use crate::types::favorite::TRANSPARENT;

/// Decoded icon pixels, row-major `0xRRGGBBAA`.
pub struct IconBitmap {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl IconBitmap {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Returns the dominant opaque color of `icon` with full alpha, or
/// [`TRANSPARENT`] when there is no icon or no opaque pixel. Bucket
/// iteration is ordered, so ties resolve the same way every run.
pub fn dominant_accent(icon: Option<&IconBitmap>) -> u32 {
    let icon = match icon {
        Some(icon) => icon,
        None => return TRANSPARENT,
    };

    let mut buckets: BTreeMap<u32, (u64, u64, u64, u64)> = BTreeMap::new();
    for &pixel in icon.pixels.iter().take(icon.width * icon.height) {
        let alpha = pixel & 0xff;
        if alpha < 0x80 {
            continue;
        }
        let r = (pixel >> 24) & 0xff;
        let g = (pixel >> 16) & 0xff;
        let b = (pixel >> 8) & 0xff;
        let key = ((r >> 5) << 6) | ((g >> 5) << 3) | (b >> 5);
        let entry = buckets.entry(key).or_insert((0, 0, 0, 0));
        entry.0 += 1;
        entry.1 += u64::from(r);
        entry.2 += u64::from(g);
        entry.3 += u64::from(b);
    }

    match buckets.values().max_by_key(|(count, _, _, _)| *count) {
        Some((count, r, g, b)) => {
            let r = (r / count) as u32;
            let g = (g / count) as u32;
            let b = (b / count) as u32;
            (r << 24) | (g << 16) | (b << 8) | 0xff
        }
        None => TRANSPARENT,
    }
}

/// Substitutes the configured default accent for [`TRANSPARENT`].
pub fn resolve_accent(color: u32, default: u32) -> u32 {
    if color == TRANSPARENT {
        default
    } else {
        color
    }
}
