//! `OrdinalWeekday` — a weekday qualified by its position within a month.

use hc_core::errors::{Error, Result};
use hc_core::Year;
use hc_time::date::days_in_month;
use hc_time::{Date, Weekday};

/// Position of a weekday within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ordinal {
    /// The first occurrence.
    First,
    /// The second occurrence.
    Second,
    /// The third occurrence.
    Third,
    /// The fourth occurrence.
    Fourth,
    /// The final occurrence, whether it is the fourth or the fifth.
    Last,
}

impl Ordinal {
    /// Parse `first`, `second`, `third`, `fourth` or `last`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first" => Some(Ordinal::First),
            "second" => Some(Ordinal::Second),
            "third" => Some(Ordinal::Third),
            "fourth" => Some(Ordinal::Fourth),
            "last" => Some(Ordinal::Last),
            _ => None,
        }
    }

    /// The ordinal for the `n`-th occurrence in a month.  A fifth occurrence
    /// is always the last one.
    pub fn from_occurrence(n: u8) -> Option<Self> {
        match n {
            1 => Some(Ordinal::First),
            2 => Some(Ordinal::Second),
            3 => Some(Ordinal::Third),
            4 => Some(Ordinal::Fourth),
            5 => Some(Ordinal::Last),
            _ => None,
        }
    }

    /// Lower-case name, as used in expressions.
    pub fn name(&self) -> &'static str {
        match self {
            Ordinal::First => "first",
            Ordinal::Second => "second",
            Ordinal::Third => "third",
            Ordinal::Fourth => "fourth",
            Ordinal::Last => "last",
        }
    }

    fn nth(&self) -> Option<u8> {
        match self {
            Ordinal::First => Some(1),
            Ordinal::Second => Some(2),
            Ordinal::Third => Some(3),
            Ordinal::Fourth => Some(4),
            Ordinal::Last => None,
        }
    }
}

/// A weekday qualified by an [`Ordinal`], such as `first_monday` or
/// `last_thursday`.
///
/// Values are either parsed from an expression, or derived from a concrete
/// date with [`OrdinalWeekday::from_date`].  A derived value also remembers
/// which occurrence the date was and whether it was the final one in its
/// month, so that a derived "fourth Monday" that happens to be the final
/// Monday [`matches`](OrdinalWeekday::matches) `last_monday`.
///
/// `==` is structural.  Use `matches` to compare rules against dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinalWeekday {
    ordinal: Ordinal,
    weekday: Weekday,
    occurrence: Option<u8>,
    is_final: bool,
}

impl OrdinalWeekday {
    /// Construct from parts.
    pub fn new(ordinal: Ordinal, weekday: Weekday) -> Self {
        Self {
            ordinal,
            weekday,
            occurrence: None,
            is_final: ordinal == Ordinal::Last,
        }
    }

    /// Parse an expression of the form `<ordinal>_<weekday>`, e.g.
    /// `first_monday`.  Case is ignored; `_`, `-` and spaces all separate
    /// the two words.  The weekday must be spelled in full.
    ///
    /// # Errors
    /// [`Error::InvalidExpression`] if either word is not recognised.
    pub fn parse(expression: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidExpression {
            expression: expression.to_string(),
            reason,
        };
        let words: Vec<&str> = expression
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .collect();
        let [ordinal, weekday] = words.as_slice() else {
            return Err(invalid("expected <ordinal>_<weekday>".into()));
        };
        let weekday = Weekday::ALL
            .into_iter()
            .find(|w| w.long_name().eq_ignore_ascii_case(weekday))
            .ok_or_else(|| invalid(format!("unknown weekday '{weekday}'")))?;
        let ordinal = Ordinal::from_name(ordinal)
            .ok_or_else(|| invalid(format!("unknown ordinal '{ordinal}'")))?;
        Ok(Self::new(ordinal, weekday))
    }

    /// Describe `date` as the occurrence of its weekday within its month.
    ///
    /// The fifth occurrence of a weekday is reported as [`Ordinal::Last`].
    pub fn from_date(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        let occurrence = (day + 6) / 7;
        let days_left = days_in_month(year, month) - day;
        Self {
            ordinal: Ordinal::from_occurrence(occurrence).unwrap_or(Ordinal::Last),
            weekday: date.weekday(),
            occurrence: Some(occurrence),
            is_final: days_left < 7,
        }
    }

    /// The ordinal.
    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// The weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// For values derived from a date, which occurrence (1–5) it was.
    pub fn occurrence(&self) -> Option<u8> {
        self.occurrence
    }

    /// Return `true` if this denotes the final such weekday of its month.
    pub fn is_last(&self) -> bool {
        self.is_final
    }

    /// Return `true` if `self` and `other` name the same expression, or
    /// share a weekday and both denote the final occurrence in the month.
    ///
    /// This relation is not transitive: a derived fourth-and-final Monday
    /// matches both `fourth_monday` and `last_monday`, which do not match
    /// each other.
    pub fn matches(&self, other: &OrdinalWeekday) -> bool {
        if self.weekday != other.weekday {
            return false;
        }
        self.ordinal == other.ordinal || (self.is_last() && other.is_last())
    }

    /// The date this expression denotes in `year`/`month`.
    ///
    /// # Errors
    /// An error if the year or month is out of range.
    pub fn resolve(&self, year: Year, month: u8) -> Result<Date> {
        match self.ordinal.nth() {
            Some(n) => Date::nth_weekday(n, self.weekday, year, month),
            None => Date::last_weekday(self.weekday, year, month),
        }
    }

    /// The expression text, e.g. `"last_monday"`.
    pub fn expression(&self) -> String {
        format!(
            "{}_{}",
            self.ordinal.name(),
            self.weekday.long_name().to_ascii_lowercase()
        )
    }
}

impl std::fmt::Display for OrdinalWeekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression())
    }
}

impl std::str::FromStr for OrdinalWeekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
