//! `WorkingCalendar` trait and the `WeekendsOnly` calendar.
//!
//! A working calendar knows which dates are weekends and public holidays;
//! everything else (working-day tests, offsets, counts) is derived from
//! those two facts.

use crate::date::Date;
use crate::direction::Direction;
use crate::weekday::WeekdaySet;
use hc_core::errors::{Error, Result};

/// A territory's calendar of weekends and public holidays.
pub trait WorkingCalendar: std::fmt::Debug + Send + Sync {
    /// Territory identifier (e.g. `"uk"`).
    fn territory(&self) -> &str;

    /// The weekdays treated as weekend days.
    fn weekend_days(&self) -> WeekdaySet;

    /// Return `true` if `date` is a public holiday.  Weekends are never
    /// public holidays.
    fn is_public_holiday(&self, date: Date) -> bool;

    /// Name of the holiday observed on `date`, optionally followed by its
    /// adjustment note in parentheses.
    fn holiday_name(&self, date: Date, include_adjustment_note: bool) -> Option<String>;

    /// Return `true` if `date` falls on a weekend day.
    fn is_weekend(&self, date: Date) -> bool {
        self.weekend_days().contains(date.weekday())
    }

    /// Return `true` if `date` is neither a weekend nor a public holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }

    /// Return `date` if it is a working day, otherwise the first working day
    /// reached by walking in `direction`.
    ///
    /// # Errors
    /// [`Error::Date`] if the walk leaves the representable date range.
    fn adjust(&self, mut date: Date, direction: Direction) -> Result<Date> {
        while !self.is_working_day(date) {
            date = date.add_days(direction.step())?;
        }
        Ok(date)
    }

    /// Step one calendar day at a time in `direction`, counting only working
    /// days, until `n` working days have been passed; return the date reached.
    ///
    /// `n == 0` returns `start` unchanged.
    ///
    /// # Errors
    /// [`Error::Date`] if the walk leaves the representable date range.
    fn offset_working_days(&self, mut date: Date, n: u32, direction: Direction) -> Result<Date> {
        let mut remaining = n;
        while remaining > 0 {
            date = date.add_days(direction.step())?;
            if self.is_working_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the working days between `start` (exclusive) and `end`
    /// (inclusive).
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `start >= end`.
    fn working_days_between(&self, start: Date, end: Date) -> Result<u32> {
        if start >= end {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        let mut count = 0;
        for serial in start.serial() + 1..=end.serial() {
            if self.is_working_day(Date::from_serial(serial)?) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// The first working day strictly after `date`.
    ///
    /// # Errors
    /// [`Error::Date`] if there is none before the end of the date range.
    fn next_working_day(&self, date: Date) -> Result<Date> {
        self.offset_working_days(date, 1, Direction::Forward)
    }

    /// The last working day strictly before `date`.
    ///
    /// # Errors
    /// [`Error::Date`] if there is none after the start of the date range.
    fn previous_working_day(&self, date: Date) -> Result<Date> {
        self.offset_working_days(date, 1, Direction::Backward)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl WorkingCalendar for WeekendsOnly {
    fn territory(&self) -> &str {
        "Weekends Only"
    }

    fn weekend_days(&self) -> WeekdaySet {
        WeekdaySet::SATURDAY_SUNDAY
    }

    fn is_public_holiday(&self, _date: Date) -> bool {
        false
    }

    fn holiday_name(&self, _date: Date, _include_adjustment_note: bool) -> Option<String> {
        None
    }
}
