//! `Date` type.
//!
//! Dates are represented as a serial number of days in the proleptic
//! Gregorian calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use crate::month::Month;
use crate::weekday::Weekday;
use hc_core::errors::{Error, Result};
use hc_core::Year;

/// A naive calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// First representable year.
pub const MIN_YEAR: Year = 1;

/// Last representable year.
pub const MAX_YEAR: Year = 9999;

/// `days_from_civil(1, 1, 1)` is -719 162; shifting by this makes 0001-01-01
/// serial 1.
const SERIAL_OFFSET: i32 = 719_163;

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside [`Date::MIN`, `Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month, day) + SERIAL_OFFSET))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> Year {
        civil_from_days(self.0 - SERIAL_OFFSET).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0 - SERIAL_OFFSET).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("civil_from_days yields months in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0 - SERIAL_OFFSET).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (Year, u8, u8) {
        civil_from_days(self.0 - SERIAL_OFFSET)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan1 = days_from_civil(self.year(), 1, 1) + SERIAL_OFFSET;
        (self.0 - jan1 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 0001-01-01 is a Monday: serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::Date(format!("date arithmetic: {self} + {n} overflows"))),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y, m, 1) + SERIAL_OFFSET)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y, m, days_in_month(y, m)) + SERIAL_OFFSET)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if the month or year is out of range, or if `n` is
    /// zero or larger than the number of such weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal(); // 1=Mon..7=Sun
        let target_wd = weekday.ordinal();
        // Days to advance from the 1st to reach the first occurrence
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7) as u8;
        let day = 1 + skip as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year:04}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`,
    /// found by walking back from the last calendar day of the month.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let back = (last.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        Ok(Date(last.0 - back))
    }

    /// Format as `"Sat 25 Dec 2010"`, the form used in adjustment notes and
    /// holiday listings.
    pub fn to_day_label(&self) -> String {
        let (y, m, d) = self.ymd();
        let mon = Month::from_number(m).map_or("???", |mm| mm.short_name());
        format!("{} {d:02} {mon} {y:04}", self.weekday().short_name())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        // chrono counts 0001-01-01 as day 1 of the common era, like our serial.
        Date::from_serial(value.num_days_from_ce())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(value: Date) -> Result<Self> {
        chrono::NaiveDate::from_num_days_from_ce_opt(value.serial())
            .ok_or_else(|| Error::Date(format!("{value} not representable as NaiveDate")))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian (year, month, day).
fn days_from_civil(year: Year, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month as i32 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i32 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (Year, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
