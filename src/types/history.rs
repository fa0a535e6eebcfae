use serde::{Deserialize, Serialize};

/// Represents a single visited page.
///
/// At most one entry exists per URL: revisiting a page updates `title` and
/// `timestamp` of the existing row instead of creating a new one. `id` is
/// assigned by the store on first insert and stays fixed for the lifetime
/// of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Visit time in milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

impl HistoryEntry {
    /// One-line list row summary: title plus formatted visit time.
    pub fn visit_summary(&self) -> String {
        format!("{} ({})", self.title, format_timestamp(self.timestamp))
    }
}

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM` (UTC).
pub fn format_timestamp(timestamp_ms: i64) -> String {
    let secs = timestamp_ms.div_euclid(1000);
    let days = secs.div_euclid(86_400);
    let time_of_day = secs.rem_euclid(86_400);

    // Days-to-civil conversion (UTC), inverse of the usual civil-to-days formula
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60
    )
}
