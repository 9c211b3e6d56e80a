pub mod classify;
pub mod refresh;
pub mod resolve;
pub mod time_extract;
pub mod windows;

use chrono::Duration;

/// Orders due within this many hours trigger the alert, overdue included.
pub const ALERT_LEAD_HOURS: i64 = 2;

/// How long a fetched order set stays cached before the feed is hit again.
pub const REFRESH_TTL_SECS: u64 = 300;

pub fn alert_lead() -> Duration {
    Duration::hours(ALERT_LEAD_HOURS)
}
