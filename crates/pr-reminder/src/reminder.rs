//! Age and urgency formatting
//!
//! Turns how long a pull request has been waiting into the "N hours ago"
//! text of the report, escalating with Slack emoji as it gets older.

use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// How loudly a waiting pull request is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    /// Under 3 hours
    Calm,
    /// 3 hours or more
    Nudge,
    /// 6 hours or more
    Overdue,
    /// 12 hours or more
    Critical,
}

impl Urgency {
    /// Tier for a pull request `hours_old` hours old; negative ages count as zero
    pub fn from_hours(hours_old: i64) -> Self {
        match hours_old.max(0) {
            h if h >= 12 => Self::Critical,
            h if h >= 6 => Self::Overdue,
            h if h >= 3 => Self::Nudge,
            _ => Self::Calm,
        }
    }

    /// Emoji shortcodes appended to the age text
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Self::Calm => &[],
            Self::Nudge => &[":exclamation:"],
            Self::Overdue => &[":bangbang:"],
            Self::Critical => &[":bangbang:", ":exclamation:", ":angry:"],
        }
    }
}

/// Whole hours between `created_at` and `now`, rounded, never negative
pub fn hours_old(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - created_at).num_milliseconds();
    let hours = (millis as f64 / MILLIS_PER_HOUR).round() as i64;
    hours.max(0)
}

/// "N hours ago" followed by the urgency markers for that age
pub fn reminder_text(hours_old: i64) -> String {
    let hours = hours_old.max(0);
    let unit = if hours == 1 { "hour" } else { "hours" };
    let markers = Urgency::from_hours(hours).markers();

    if markers.is_empty() {
        format!("{hours} {unit} ago")
    } else {
        format!("{hours} {unit} ago {}", markers.concat())
    }
}
