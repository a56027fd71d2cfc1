//! Formatting helpers shared by the renderers and the report.

use chrono::DateTime;
use chrono_tz::Tz;

/// Format a local timestamp as `2024-01-15 09:30:00 -0800 PST`.
pub fn format_local_time(ts: &DateTime<Tz>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S %z %Z").to_string()
}
