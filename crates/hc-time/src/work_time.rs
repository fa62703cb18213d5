//! `WorkTime` — a time of day with no notion of date.

use hc_core::errors::{Error, Result};
use hc_core::{ensure, Minutes};

/// A time of day at minute resolution.
///
/// Stored as minutes since midnight; ordering compares those minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WorkTime {
    minutes: u16,
}

impl WorkTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: WorkTime = WorkTime { minutes: 0 };

    /// Noon (12:00).
    pub const NOON: WorkTime = WorkTime { minutes: 720 };

    /// Create a time from hours (0–23) and minutes (0–59).
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        ensure!(hour <= 23, Error::InvalidTime { field: "hour", value: hour });
        ensure!(
            minute <= 59,
            Error::InvalidTime {
                field: "minute",
                value: minute
            }
        );
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Hour of the day (0–23).
    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    /// Minute of the hour (0–59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> Minutes {
        Minutes::from(self.minutes)
    }

    /// Minutes elapsed from `earlier` to `self`; zero if `earlier` is later.
    pub fn minutes_since(&self, earlier: WorkTime) -> Minutes {
        Minutes::from(self.minutes.saturating_sub(earlier.minutes))
    }

    /// Minutes from `self` until `later`; zero if `later` is earlier.
    pub fn minutes_until(&self, later: WorkTime) -> Minutes {
        later.minutes_since(*self)
    }
}

impl std::fmt::Display for WorkTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
