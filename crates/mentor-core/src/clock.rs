//! Time source used to stamp records, audit entries and results.

use chrono::{Duration, Local, NaiveDateTime};
use std::sync::Mutex;

/// Format of every timestamp the store writes or returns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Supplies the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Current time formatted as `YYYY-MM-DD HH:MM:SS`.
    fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

/// Formats a time with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Used for deterministic timestamps.
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Parses `start` with [`TIMESTAMP_FORMAT`].
    pub fn at(start: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(start, TIMESTAMP_FORMAT).map(Self::new)
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_formats_and_advances() {
        let clock = FixedClock::at("2024-03-05 09:08:07").unwrap();
        assert_eq!(clock.timestamp(), "2024-03-05 09:08:07");

        clock.advance(Duration::seconds(61));
        assert_eq!(clock.timestamp(), "2024-03-05 09:09:08");
    }

    #[test]
    fn test_system_clock_timestamp_shape() {
        let ts = SystemClock.timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
