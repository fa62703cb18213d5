//! `HolidaySnapshot` — an immutable copy of a calendar's holidays for a
//! fixed span of years.
//!
//! A snapshot never locks and never materializes, which makes it suitable
//! for sharing behind an `Arc` between many reader threads.  Dates outside
//! the covered years are treated as having no holidays; check
//! [`HolidaySnapshot::covers`] when that matters.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use hc_core::Year;
use hc_time::{Date, WeekdaySet, WorkingCalendar};

use crate::instance::HolidayInstance;

/// Pre-materialized holidays of one territory.
#[derive(Debug, Clone)]
pub struct HolidaySnapshot {
    territory: String,
    weekend: WeekdaySet,
    years: RangeInclusive<Year>,
    by_date: BTreeMap<Date, HolidayInstance>,
}

impl HolidaySnapshot {
    pub(crate) fn new(
        territory: String,
        weekend: WeekdaySet,
        years: RangeInclusive<Year>,
        by_date: BTreeMap<Date, HolidayInstance>,
    ) -> Self {
        Self {
            territory,
            weekend,
            years,
            by_date,
        }
    }

    /// The years this snapshot holds.
    pub fn years(&self) -> &RangeInclusive<Year> {
        &self.years
    }

    /// Return `true` if `date` lies in a covered year.
    pub fn covers(&self, date: Date) -> bool {
        self.years.contains(&date.year())
    }

    /// The holiday observed on `date`, including weekend-located ones.
    pub fn holiday(&self, date: Date) -> Option<&HolidayInstance> {
        self.by_date.get(&date)
    }

    /// Every holiday in the snapshot, in date order.
    pub fn holidays(&self) -> impl Iterator<Item = &HolidayInstance> + '_ {
        self.by_date.values()
    }
}

impl WorkingCalendar for HolidaySnapshot {
    fn territory(&self) -> &str {
        &self.territory
    }

    fn weekend_days(&self) -> WeekdaySet {
        self.weekend
    }

    fn is_public_holiday(&self, date: Date) -> bool {
        !self.is_weekend(date) && self.by_date.contains_key(&date)
    }

    fn holiday_name(&self, date: Date, include_adjustment_note: bool) -> Option<String> {
        if self.is_weekend(date) {
            return None;
        }
        self.holiday(date).map(|h| h.name(include_adjustment_note))
    }
}
