// Property-based tests for countdown decomposition

use chrono::{Duration, TimeZone, Utc};
use launch_countdown::services::countdown::{Countdown, MS_PER_DAY};
use proptest::prelude::*;

fn base() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

proptest! {
    /// Reconstructing the fields never overshoots and loses less than a second
    #[test]
    fn prop_future_target_reconstructs_within_a_second(
        now_offset in 0i64..(400 * MS_PER_DAY as i64),
        diff in 1i64..(900 * MS_PER_DAY as i64),
    ) {
        let now = base() + Duration::milliseconds(now_offset);
        let target = now + Duration::milliseconds(diff);

        let countdown = Countdown::between(target, now);
        let rebuilt = countdown.reconstructed_ms() as i64;

        prop_assert!(rebuilt <= diff);
        prop_assert!(rebuilt > diff - 1000);
        prop_assert!(countdown.hours < 24);
        prop_assert!(countdown.minutes < 60);
        prop_assert!(countdown.seconds < 60);
    }

    /// Targets at or before now collapse to zero
    #[test]
    fn prop_past_target_is_all_zero(
        now_offset in 0i64..(400 * MS_PER_DAY as i64),
        behind in 0i64..(900 * MS_PER_DAY as i64),
    ) {
        let now = base() + Duration::milliseconds(now_offset);
        let target = now - Duration::milliseconds(behind);

        let countdown = Countdown::between(target, now);
        prop_assert_eq!(countdown, Countdown::ELAPSED);
        prop_assert!(countdown.is_elapsed());
        prop_assert_eq!(countdown.total_ms, 0);
    }

    /// Moving the clock forward never makes the countdown grow
    #[test]
    fn prop_countdown_is_monotonic(
        diff in 0i64..(30 * MS_PER_DAY as i64),
        step in 0i64..100_000i64,
    ) {
        let target = base() + Duration::milliseconds(diff);
        let earlier = Countdown::between(target, base());
        let later = Countdown::between(target, base() + Duration::milliseconds(step));
        prop_assert!(later.total_ms <= earlier.total_ms);
    }
}

#[test]
fn test_exact_day_boundary() {
    let target = base() + Duration::days(1);
    let countdown = Countdown::between(target, base());
    assert_eq!(countdown.days, 1);
    assert_eq!((countdown.hours, countdown.minutes, countdown.seconds), (0, 0, 0));
    assert!(!countdown.is_within_day());

    let countdown = Countdown::between(target, base() + Duration::milliseconds(1));
    assert_eq!(countdown.days, 0);
    assert_eq!((countdown.hours, countdown.minutes, countdown.seconds), (23, 59, 59));
    assert!(countdown.is_within_day());
}
