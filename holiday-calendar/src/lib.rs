//! # holiday-calendar
//!
//! Public-holiday calendars built from declarative rules, with
//! working-day arithmetic and per-weekday working hours.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holiday_calendar::prelude::*;
//!
//! let christmas = HolidayRule::builder("Christmas Day")
//!     .all_years()
//!     .month("December")
//!     .day(25)
//!     .shift_later_on(["Saturday", "Sunday"])
//!     .build()
//!     .unwrap();
//! let cal = HolidayCalendar::new("uk", ["Saturday", "Sunday"], [christmas]).unwrap();
//!
//! let observed = Date::from_ymd(2010, 12, 27).unwrap();
//! assert!(cal.is_public_holiday(observed));
//! assert_eq!(
//!     cal.holiday_name(observed, true).as_deref(),
//!     Some("Christmas Day (carried forward from Sat 25 Dec 2010)")
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use hc_core as core;

/// Dates, weekdays, times of day and the working-calendar trait.
pub use hc_time as time;

/// Holiday rules, calendars and working-time schedules.
pub use hc_calendar as calendar;

/// The types most applications need.
pub mod prelude {
    pub use hc_calendar::{
        CalendarDefinition, Date, DateTime, Direction, Error, HolidayCalendar, HolidayInstance,
        HolidayRule, HolidaySnapshot, Result, RuleDefinition, Weekday, WorkSchedule, WorkTime,
        WorkingCalendar,
    };
}
