//! Wall-clock seam for history timestamps.

use chrono::{NaiveTime, Timelike};

use crate::constants::TIMESTAMP_FORMAT;

/// Source of the local time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Always reports the same instant. Handy for tests and transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Drop sub-second precision.
#[must_use]
pub fn truncate_to_second(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Format as a 12-hour clock with seconds, e.g. `3:07:42 PM`.
#[must_use]
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
