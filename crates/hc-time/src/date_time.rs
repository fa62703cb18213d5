//! `DateTime` — a naive date plus a time of day.

use crate::date::Date;
use crate::weekday::Weekday;
use crate::work_time::WorkTime;
use hc_core::errors::Result;
use hc_core::Year;

/// A naive instant: a calendar date and a minute-resolution time of day.
///
/// Ordered by date, then time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: WorkTime,
}

impl DateTime {
    /// Combine a date and a time of day.
    pub fn new(date: Date, time: WorkTime) -> Self {
        Self { date, time }
    }

    /// Build from year, month, day, hour and minute.
    pub fn from_ymd_hm(year: Year, month: u8, day: u8, hour: u32, minute: u32) -> Result<Self> {
        Ok(Self::new(
            Date::from_ymd(year, month, day)?,
            WorkTime::new(hour, minute)?,
        ))
    }

    /// The calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The time of day.
    pub fn time(&self) -> WorkTime {
        self.time
    }

    /// The weekday of the date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Same date, different time of day.
    pub fn with_time(&self, time: WorkTime) -> Self {
        Self::new(self.date, time)
    }

    /// Same time of day, different date.
    pub fn with_date(&self, date: Date) -> Self {
        Self::new(date, self.time)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date.to_day_label(), self.time)
    }
}
