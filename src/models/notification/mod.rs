// Notification preference model
// Per-launch reminder toggles shown in the detail view. Nothing is delivered;
// the flags only drive the toggle controls.

use serde::{Deserialize, Serialize};

/// A reminder a user can opt into for one launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationOffset {
    DayBefore,
    HourBefore,
    TenMinutesBefore,
    Liftoff,
    ScheduleChanges,
}

impl NotificationOffset {
    /// All offsets in display order
    pub const ALL: [NotificationOffset; 5] = [
        NotificationOffset::DayBefore,
        NotificationOffset::HourBefore,
        NotificationOffset::TenMinutesBefore,
        NotificationOffset::Liftoff,
        NotificationOffset::ScheduleChanges,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationOffset::DayBefore => "24 hours before",
            NotificationOffset::HourBefore => "1 hour before",
            NotificationOffset::TenMinutesBefore => "10 minutes before",
            NotificationOffset::Liftoff => "Liftoff",
            NotificationOffset::ScheduleChanges => "Schedule changes",
        }
    }
}

/// Five independent flags, one per [`NotificationOffset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub day_before: bool,
    pub hour_before: bool,
    pub ten_minutes_before: bool,
    pub liftoff: bool,
    pub schedule_changes: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            day_before: false,
            hour_before: true,
            ten_minutes_before: true,
            liftoff: true,
            schedule_changes: true,
        }
    }
}

impl NotificationPreferences {
    pub fn is_enabled(&self, offset: NotificationOffset) -> bool {
        match offset {
            NotificationOffset::DayBefore => self.day_before,
            NotificationOffset::HourBefore => self.hour_before,
            NotificationOffset::TenMinutesBefore => self.ten_minutes_before,
            NotificationOffset::Liftoff => self.liftoff,
            NotificationOffset::ScheduleChanges => self.schedule_changes,
        }
    }

    fn flag_mut(&mut self, offset: NotificationOffset) -> &mut bool {
        match offset {
            NotificationOffset::DayBefore => &mut self.day_before,
            NotificationOffset::HourBefore => &mut self.hour_before,
            NotificationOffset::TenMinutesBefore => &mut self.ten_minutes_before,
            NotificationOffset::Liftoff => &mut self.liftoff,
            NotificationOffset::ScheduleChanges => &mut self.schedule_changes,
        }
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, offset: NotificationOffset) -> bool {
        let flag = self.flag_mut(offset);
        *flag = !*flag;
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_detail_view() {
        let prefs = NotificationPreferences::default();
        assert!(!prefs.is_enabled(NotificationOffset::DayBefore));
        assert!(prefs.is_enabled(NotificationOffset::HourBefore));
        assert!(prefs.is_enabled(NotificationOffset::TenMinutesBefore));
        assert!(prefs.is_enabled(NotificationOffset::Liftoff));
        assert!(prefs.is_enabled(NotificationOffset::ScheduleChanges));
    }

    #[test]
    fn test_toggle_flips_only_that_flag() {
        for offset in NotificationOffset::ALL {
            let before = NotificationPreferences::default();
            let mut after = before;
            let new_value = after.toggle(offset);

            assert_eq!(new_value, !before.is_enabled(offset));
            for other in NotificationOffset::ALL.into_iter().filter(|o| *o != offset) {
                assert_eq!(
                    after.is_enabled(other),
                    before.is_enabled(other),
                    "toggling {offset:?} changed {other:?}"
                );
            }
        }
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut prefs = NotificationPreferences::default();
        prefs.toggle(NotificationOffset::Liftoff);
        prefs.toggle(NotificationOffset::Liftoff);
        assert_eq!(prefs, NotificationPreferences::default());
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = NotificationOffset::ALL.iter().map(|o| o.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 5);
    }
}
