// Test fixtures - reusable launch data
// Provides a fixed "now" and a small schedule shared by the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use launch_countdown::models::launch::{LaunchRecord, LaunchStatus};

/// Feb 10, 2026 at noon UTC, one day before the first bundled launch
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap()
}

/// A launch `offset` away from [`now`]
pub fn launch_in(id: &str, provider: &str, offset: Duration) -> LaunchRecord {
    LaunchRecord::builder()
        .id(id)
        .provider(provider)
        .vehicle("Falcon 9")
        .mission(format!("Mission {id}"))
        .site("Cape Canaveral SFS", "FL")
        .pad("SLC-40")
        .launch_time(now() + offset)
        .build()
        .unwrap()
}

/// Mixed schedule: past, imminent, far off, various providers
pub fn schedule() -> Vec<LaunchRecord> {
    vec![
        launch_in("past", "SpaceX", Duration::hours(-3)),
        launch_in("soon-ula", "ULA", Duration::hours(20)),
        launch_in("edge", "SpaceX", Duration::milliseconds(259_200_000)),
        launch_in("just-inside", "spacex", Duration::milliseconds(259_199_999)),
        launch_in("far-nasa", "NASA", Duration::days(30)),
        launch_in("rideshare", "SpaceX Rideshare", Duration::days(5)),
    ]
}

/// A four-hour window opening two days from [`now`]
pub fn window_launch() -> LaunchRecord {
    let open = now() + Duration::days(2);
    LaunchRecord::builder()
        .id("window")
        .provider("Blue Origin")
        .vehicle("New Glenn")
        .mission("NG-3")
        .site("Cape Canaveral SFS", "FL")
        .pad("LC-36")
        .launch_time(open)
        .window_until(open + Duration::hours(4))
        .status(LaunchStatus::Scheduled)
        .build()
        .unwrap()
}
