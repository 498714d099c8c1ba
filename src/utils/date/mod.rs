// Date utility functions
// Formatting of launch timestamps in the configured display zone

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::models::launch::LaunchRecord;

/// "Wednesday, February 11, 2026"
pub fn format_long_date(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%A, %B %-d, %Y").to_string()
}

/// "2:30 PM UTC"
pub fn format_time_with_zone(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%-I:%M %p %Z").to_string()
}

/// "2:30 PM", used for the header sync stamp
pub fn format_short_time(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%-I:%M %p").to_string()
}

/// The schedule block of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub heading: &'static str,
    pub date: String,
    pub start_time: String,
    /// Present only for windows with a known close
    pub end_time: Option<String>,
}

impl ScheduleSummary {
    pub fn for_launch(launch: &LaunchRecord, tz: Tz) -> Self {
        let heading = if launch.is_window {
            "Launch Window"
        } else {
            "Target T-0"
        };

        Self {
            heading,
            date: format_long_date(launch.launch_time, tz),
            start_time: format_time_with_zone(launch.launch_time, tz),
            end_time: launch
                .effective_window_end()
                .map(|end| format_time_with_zone(end, tz)),
        }
    }

    /// "1:00 PM UTC → 5:00 PM UTC" for windows, the start time otherwise.
    pub fn time_line(&self) -> String {
        match &self.end_time {
            Some(end) => format!("{} → {}", self.start_time, end),
            None => self.start_time.clone(),
        }
    }
}
