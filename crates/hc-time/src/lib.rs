//! # hc-time
//!
//! Naive calendar primitives: dates, weekdays, months, times of day, and the
//! [`WorkingCalendar`] trait shared by every calendar in the workspace.
//!
//! All dates are naive calendar dates (no time zones).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkingCalendar` trait and the `WeekendsOnly` calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DateTime` — a date plus a minute-resolution time of day.
pub mod date_time;

/// Stepping direction for date walks.
pub mod direction;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week, and `WeekdaySet`.
pub mod weekday;

/// `WorkTime` — a time of day.
pub mod work_time;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{WeekendsOnly, WorkingCalendar};
pub use date::Date;
pub use date_time::DateTime;
pub use direction::Direction;
pub use month::Month;
pub use weekday::{Weekday, WeekdaySet};
pub use work_time::WorkTime;
