use crate::models::notification::{NotificationOffset, NotificationPreferences};
use crate::services::clock::Clock;
use crate::services::countdown::IntervalTimer;
use crate::services::filter::LaunchFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// State owned by an open detail view. Dropped when the view closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailViewState {
    pub launch_id: String,
    pub notifications: NotificationPreferences,
}

impl DetailViewState {
    pub fn new(launch_id: impl Into<String>) -> Self {
        Self {
            launch_id: launch_id.into(),
            notifications: NotificationPreferences::default(),
        }
    }
}

/// Session-scoped view state. Never persisted; a restart starts fresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: LaunchFilter,
    pub selection: Option<DetailViewState>,
}

impl ViewState {
    pub fn screen(&self) -> Screen {
        if self.selection.is_some() {
            Screen::Detail
        } else {
            Screen::List
        }
    }

    /// Open the detail view for `launch_id` with fresh notification toggles.
    pub fn select(&mut self, launch_id: impl Into<String>) {
        let launch_id = launch_id.into();
        log::debug!("opening detail for launch {}", launch_id);
        self.selection = Some(DetailViewState::new(launch_id));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn set_filter(&mut self, filter: LaunchFilter) {
        if self.filter != filter {
            log::debug!("filter changed to {:?}", filter);
            self.filter = filter;
        }
    }

    /// Flip one toggle on the open detail view. Returns the new value, or
    /// `None` when no detail view is open.
    pub fn toggle_notification(&mut self, offset: NotificationOffset) -> Option<bool> {
        self.selection
            .as_mut()
            .map(|detail| detail.notifications.toggle(offset))
    }
}

/// The "Synced" stamp in the list header.
///
/// Its timer runs only while the list is on screen. Coming back to the list
/// restarts the timer one period out, so the stamp only moves on a full period.
#[derive(Debug, Clone)]
pub struct SyncStamp {
    timer: IntervalTimer,
    last_synced: DateTime<Utc>,
}

impl SyncStamp {
    pub fn new(period: Duration, synced_at: DateTime<Utc>) -> Self {
        Self {
            timer: IntervalTimer::new(period),
            last_synced: synced_at,
        }
    }

    pub fn last_synced(&self) -> DateTime<Utc> {
        self.last_synced
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Start, stop or poll the timer for the screen being shown.
    /// Returns true when the stamp moved.
    pub fn drive<C: Clock>(&mut self, screen: Screen, now: Instant, clock: &C) -> bool {
        match screen {
            Screen::List => {
                if !self.timer.is_running() {
                    self.timer.start_deferred(now);
                }
                if self.timer.poll(now) {
                    self.last_synced = clock.now();
                    log::debug!("Sync stamp refreshed at {}", self.last_synced);
                    return true;
                }
                false
            }
            Screen::Detail => {
                if self.timer.is_running() {
                    self.timer.stop();
                    log::debug!("Sync timer paused while detail view is open");
                }
                false
            }
        }
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }
}
