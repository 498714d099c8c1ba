use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::models::Countdown;
use crate::services::clock::Clock;

/// A repeating deadline with an explicit start/stop lifecycle.
///
/// A freshly started timer is due immediately, then once per period. Missed
/// periods are not replayed: after a long stall the timer fires once and
/// schedules the next tick one period from the poll.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    /// Create a stopped timer.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// Start with the first tick one period out instead of immediately.
    pub fn start_deferred(&mut self, now: Instant) {
        self.next_due = now.checked_add(self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };

        if now < due {
            return false;
        }

        let next = due
            .checked_add(self.period)
            .filter(|next| *next > now)
            .or_else(|| now.checked_add(self.period));
        if next.is_none() {
            log::warn!(
                "Timer period {:?} is out of range, stopping after this tick",
                self.period
            );
        }
        self.next_due = next;
        true
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[derive(Debug)]
struct TimerEntry {
    target: DateTime<Utc>,
    timer: IntervalTimer,
    value: Countdown,
    observed: bool,
}

/// Independent per-consumer countdown timers for the surfaces on screen.
///
/// Each frame the UI calls [`begin_frame`](Self::begin_frame), then
/// [`observe`](Self::observe) once per visible timer surface, then
/// [`end_frame`](Self::end_frame). Surfaces that were not observed are treated
/// as unmounted and their timers are stopped and dropped, so off-screen
/// launches never tick. Consumers never share a cached value.
#[derive(Debug)]
pub struct CountdownTimers<K> {
    period: Duration,
    entries: HashMap<K, TimerEntry>,
}

impl<K> CountdownTimers<K>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            entries: HashMap::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        for entry in self.entries.values_mut() {
            entry.observed = false;
        }
    }

    /// Current countdown for `key`, recomputed when its timer is due.
    ///
    /// A new key, or a key whose target changed, starts a fresh timer and is
    /// computed immediately.
    pub fn observe<C: Clock>(
        &mut self,
        key: K,
        target: DateTime<Utc>,
        now: Instant,
        clock: &C,
    ) -> Countdown {
        let period = self.period;
        let entry = self.entries.entry(key.clone()).or_insert_with(|| {
            log::debug!("starting countdown timer {:?}", key);
            let mut timer = IntervalTimer::new(period);
            timer.start(now);
            TimerEntry {
                target,
                timer,
                value: Countdown::ELAPSED,
                observed: false,
            }
        });

        if entry.target != target {
            log::debug!("countdown timer {:?} retargeted to {}", key, target);
            entry.target = target;
            entry.timer.start(now);
        }

        entry.observed = true;
        if entry.timer.poll(now) {
            entry.value = Countdown::until(target, clock);
        }
        entry.value
    }

    /// Stop and drop every timer not observed since `begin_frame`.
    /// Returns how many were stopped.
    pub fn end_frame(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, entry| {
            if !entry.observed {
                entry.timer.stop();
                log::debug!("stopping countdown timer {:?}", key);
            }
            entry.observed
        });
        before - self.entries.len()
    }

    /// Earliest pending tick across all live timers.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.entries
            .values()
            .filter_map(|entry| entry.timer.time_until_due(now))
            .min()
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Stop everything, e.g. when the window closes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
