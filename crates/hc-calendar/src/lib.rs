//! # hc-calendar
//!
//! Declarative public-holiday rules and the calendars built from them.
//!
//! A [`HolidayCalendar`] owns a territory's weekend days and its
//! [`HolidayRule`]s.  Holiday dates are materialized lazily, one year at a
//! time, applying each rule's weekend-shift ("observed") adjustments, and
//! cached until the rule set changes.  A [`WorkSchedule`] layers per-weekday
//! working hours on top of any [`WorkingCalendar`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Boundary format consumed from configuration loaders.
pub mod definition;

/// Easter and the feasts computed from it.
pub mod easter;

/// `HolidayCalendar` — rule set, year cache, and queries.
pub mod holiday_calendar;

/// `HolidayInstance` — one rule materialized for one year.
pub mod instance;

/// `OrdinalWeekday` — "first Monday", "last Thursday", …
pub mod ordinal_weekday;

/// `HolidayRule` and its builder.
pub mod rule;

/// `HolidaySnapshot` — an immutable, pre-materialized calendar.
pub mod snapshot;

/// `WorkPeriod` — one day's working window.
pub mod work_period;

/// `WorkSchedule` — per-weekday working hours over a calendar.
pub mod work_schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use definition::{
    CalendarDefinition, DayToken, MonthToken, RuleDefinition, WeekdayToken, YearsToken,
};
pub use easter::{easter, Formula};
pub use hc_core::errors::{Error, Result};
pub use hc_time::{
    Date, DateTime, Direction, Month, WeekendsOnly, Weekday, WeekdaySet, WorkTime, WorkingCalendar,
};
pub use holiday_calendar::HolidayCalendar;
pub use instance::{Adjustment, HolidayInstance};
pub use ordinal_weekday::{Ordinal, OrdinalWeekday};
pub use rule::{HolidayRule, HolidayRuleBuilder, Occurrence, YearRange};
pub use snapshot::HolidaySnapshot;
pub use work_period::WorkPeriod;
pub use work_schedule::WorkSchedule;
