use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::launch::LaunchStatus;
use crate::services::clock::Clock;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const MS_PER_HOUR: u64 = 3_600_000;
pub const MS_PER_DAY: u64 = 86_400_000;

/// Time remaining until a target, decomposed for display.
///
/// Each field is the floor of the remainder left by the larger unit, so
/// `hours < 24`, `minutes < 60` and `seconds < 60` always hold. A target at or
/// before "now" yields the all-zero value, which callers treat as elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Raw milliseconds remaining, clamped to zero
    pub total_ms: u64,
}

impl Countdown {
    pub const ELAPSED: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_ms: 0,
    };

    /// Decompose `target - now`.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = target.signed_duration_since(now).num_milliseconds();
        if diff <= 0 {
            return Self::ELAPSED;
        }

        Self::from_millis(diff as u64)
    }

    /// Decompose the time left until `target` on the given clock.
    pub fn until(target: DateTime<Utc>, clock: &impl Clock) -> Self {
        Self::between(target, clock.now())
    }

    pub fn from_millis(total_ms: u64) -> Self {
        Self {
            days: total_ms / MS_PER_DAY,
            hours: (total_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (total_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (total_ms % MS_PER_MINUTE) / MS_PER_SECOND,
            total_ms,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.total_ms == 0
    }

    /// Less than a day to go but not yet elapsed.
    pub fn is_within_day(&self) -> bool {
        self.total_ms > 0 && self.total_ms < MS_PER_DAY
    }

    /// The decomposed fields converted back to milliseconds.
    pub fn reconstructed_ms(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    /// Compact label used on list cards.
    pub fn quick_label(&self) -> String {
        if self.is_elapsed() {
            "LAUNCHED".to_string()
        } else if self.days > 0 {
            format!("T-{}d {}h", self.days, self.hours)
        } else {
            format!("T-{}h {}m", self.hours, self.minutes)
        }
    }

    /// Spoken form, used for hover text.
    pub fn describe(&self) -> String {
        format!(
            "T-minus {} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// One segment of a running countdown, e.g. `("05", "hrs")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSegment {
    pub value: String,
    pub unit: &'static str,
}

/// What a timer surface should show for a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownDisplay {
    /// Static hold indicator instead of digits
    Hold,
    /// Nothing: the launch flew or T-0 passed
    Hidden,
    Running(Countdown),
}

impl CountdownDisplay {
    pub fn resolve(status: &LaunchStatus, countdown: Countdown) -> Self {
        match status {
            LaunchStatus::Hold => CountdownDisplay::Hold,
            LaunchStatus::Launched => CountdownDisplay::Hidden,
            _ if countdown.is_elapsed() => CountdownDisplay::Hidden,
            _ => CountdownDisplay::Running(countdown),
        }
    }

    /// Zero-padded segments; the days segment is dropped when there are none.
    pub fn segments(&self) -> Vec<CountdownSegment> {
        let CountdownDisplay::Running(countdown) = self else {
            return Vec::new();
        };

        let mut segments = Vec::with_capacity(4);
        if countdown.days > 0 {
            segments.push(CountdownSegment {
                value: format!("{:02}", countdown.days),
                unit: "days",
            });
        }
        segments.push(CountdownSegment {
            value: format!("{:02}", countdown.hours),
            unit: "hrs",
        });
        segments.push(CountdownSegment {
            value: format!("{:02}", countdown.minutes),
            unit: "min",
        });
        segments.push(CountdownSegment {
            value: format!("{:02}", countdown.seconds),
            unit: "sec",
        });
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_decomposition_uses_floor_at_each_step() {
        let target = now()
            + Duration::days(2)
            + Duration::hours(3)
            + Duration::minutes(4)
            + Duration::milliseconds(5_999);
        let countdown = Countdown::between(target, now());

        assert_eq!(countdown.days, 2);
        assert_eq!(countdown.hours, 3);
        assert_eq!(countdown.minutes, 4);
        assert_eq!(countdown.seconds, 5);
        assert_eq!(
            countdown.total_ms,
            2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5_999
        );
    }

    #[test]
    fn test_past_and_present_targets_are_elapsed() {
        assert_eq!(Countdown::between(now(), now()), Countdown::ELAPSED);
        assert_eq!(
            Countdown::between(now() - Duration::hours(5), now()),
            Countdown::ELAPSED
        );
        assert!(Countdown::between(now(), now()).is_elapsed());
    }

    #[test]
    fn test_sub_second_remaining_is_not_elapsed() {
        let countdown = Countdown::between(now() + Duration::milliseconds(400), now());
        assert!(!countdown.is_elapsed());
        assert_eq!(countdown.seconds, 0);
        assert_eq!(countdown.total_ms, 400);
    }

    #[test]
    fn test_quick_label_formats() {
        let two_days = Countdown::between(now() + Duration::hours(53), now());
        assert_eq!(two_days.quick_label(), "T-2d 5h");

        let hours = Countdown::between(now() + Duration::minutes(185), now());
        assert_eq!(hours.quick_label(), "T-3h 5m");

        assert_eq!(Countdown::ELAPSED.quick_label(), "LAUNCHED");
    }

    #[test]
    fn test_within_day_boundary() {
        assert!(Countdown::from_millis(MS_PER_DAY - 1).is_within_day());
        assert!(!Countdown::from_millis(MS_PER_DAY).is_within_day());
        assert!(!Countdown::ELAPSED.is_within_day());
    }

    #[test]
    fn test_display_policy() {
        let running = Countdown::from_millis(MS_PER_HOUR);

        assert_eq!(
            CountdownDisplay::resolve(&LaunchStatus::Hold, running),
            CountdownDisplay::Hold
        );
        assert_eq!(
            CountdownDisplay::resolve(&LaunchStatus::Hold, Countdown::ELAPSED),
            CountdownDisplay::Hold
        );
        assert_eq!(
            CountdownDisplay::resolve(&LaunchStatus::Launched, running),
            CountdownDisplay::Hidden
        );
        assert_eq!(
            CountdownDisplay::resolve(&LaunchStatus::Go, Countdown::ELAPSED),
            CountdownDisplay::Hidden
        );
        assert_eq!(
            CountdownDisplay::resolve(&LaunchStatus::Other("TBD".into()), running),
            CountdownDisplay::Running(running)
        );
    }

    #[test]
    fn test_segments_drop_days_when_zero() {
        let display = CountdownDisplay::Running(Countdown::from_millis(
            3 * MS_PER_HOUR + 7 * MS_PER_MINUTE + 9 * MS_PER_SECOND,
        ));
        let values: Vec<_> = display.segments().into_iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["03", "07", "09"]);

        let display = CountdownDisplay::Running(Countdown::from_millis(12 * MS_PER_DAY));
        let units: Vec<_> = display.segments().into_iter().map(|s| s.unit).collect();
        assert_eq!(units, vec!["days", "hrs", "min", "sec"]);

        assert!(CountdownDisplay::Hold.segments().is_empty());
    }

    #[test]
    fn test_describe() {
        let countdown =
            Countdown::from_millis(MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4_000);
        assert_eq!(
            countdown.describe(),
            "T-minus 1 days, 2 hours, 3 minutes, 4 seconds"
        );
    }
}
