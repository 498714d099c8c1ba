mod models;
mod service;

pub use models::{
    Countdown, CountdownDisplay, CountdownSegment, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND,
};
pub use service::{CountdownTimers, IntervalTimer};
