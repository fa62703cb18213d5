//! `HolidayRule` — the declarative specification of one recurring holiday.
//!
//! Rules are validated once, at construction, from a [`RuleDefinition`] or
//! through [`HolidayRuleBuilder`].  A valid rule can always be evaluated for
//! any year it applies to, except where the calendar itself has no such day
//! (29 February outside leap years, or years outside 1–9999).

use hc_core::errors::{Error, Result};
use hc_core::Year;
use hc_time::{Date, Direction, Month, Weekday, WeekdaySet};

use crate::definition::{DayToken, MonthToken, RuleDefinition, WeekdayToken, YearsToken};
use crate::easter::Formula;
use crate::ordinal_weekday::OrdinalWeekday;

// ── YearRange ─────────────────────────────────────────────────────────────────

/// An inclusive range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    first: Year,
    last: Year,
}

impl YearRange {
    /// Every year: `0..=9999`.
    pub const ALL: YearRange = YearRange {
        first: 0,
        last: 9999,
    };

    /// Construct `first..=last`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `first > last`.
    pub fn new(first: Year, last: Year) -> Result<Self> {
        hc_core::ensure!(
            first <= last,
            Error::InvalidArgument(format!("year range {first}..{last} is empty"))
        );
        Ok(Self { first, last })
    }

    /// A range holding only `year`.
    pub fn single(year: Year) -> Self {
        Self {
            first: year,
            last: year,
        }
    }

    /// First year.
    pub fn first(&self) -> Year {
        self.first
    }

    /// Last year.
    pub fn last(&self) -> Year {
        self.last
    }

    /// Return `true` if `year` is in the range.
    pub fn contains(&self, year: Year) -> bool {
        (self.first..=self.last).contains(&year)
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == YearRange::ALL {
            f.write_str("all")
        } else if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}..{}", self.first, self.last)
        }
    }
}

// ── Occurrence ────────────────────────────────────────────────────────────────

/// How a rule picks its date within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// The same month and day every year.
    FixedDay {
        /// Month.
        month: Month,
        /// Day of the month, 1–31.
        day: u8,
    },
    /// An ordinal weekday within a month, e.g. the first Monday of May.
    OrdinalWeekday {
        /// Month.
        month: Month,
        /// Which weekday, and which occurrence of it.
        ordinal_weekday: OrdinalWeekday,
    },
    /// A named formula such as Good Friday.
    Formula(Formula),
}

impl Occurrence {
    /// The date of this occurrence in `year`.
    ///
    /// # Errors
    /// An error if the calendar has no such day in `year`.
    pub fn resolve(&self, year: Year) -> Result<Date> {
        match self {
            Occurrence::FixedDay { month, day } => Date::from_ymd(year, month.number(), *day),
            Occurrence::OrdinalWeekday {
                month,
                ordinal_weekday,
            } => ordinal_weekday.resolve(year, month.number()),
            Occurrence::Formula(formula) => formula.evaluate(year),
        }
    }

    /// Return `true` if `date` is this occurrence in its own year.
    pub fn matches(&self, date: Date) -> bool {
        match self {
            Occurrence::FixedDay { month, day } => {
                date.month_of_year() == *month && date.day_of_month() == *day
            }
            Occurrence::OrdinalWeekday {
                month,
                ordinal_weekday,
            } => {
                date.month_of_year() == *month
                    && OrdinalWeekday::from_date(date).matches(ordinal_weekday)
            }
            Occurrence::Formula(formula) => formula.evaluate(date.year()).is_ok_and(|d| d == date),
        }
    }
}

// ── HolidayRule ───────────────────────────────────────────────────────────────

/// One recurring public holiday.
///
/// A rule names the years it applies to, how its date is found, and which
/// weekdays push the observed holiday to a neighbouring working day.  When a
/// weekday is in both shift sets, the later shift wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    name: String,
    years: YearRange,
    occurrence: Occurrence,
    shift_earlier_on: WeekdaySet,
    shift_later_on: WeekdaySet,
}

impl HolidayRule {
    /// Start building a rule called `name`.
    pub fn builder(name: impl Into<String>) -> HolidayRuleBuilder {
        HolidayRuleBuilder::new(name)
    }

    /// Validate a definition.
    ///
    /// # Errors
    /// - [`Error::InvalidRule`] for a missing name or years, an occurrence
    ///   that is missing or given both as month/day and as a formula, an
    ///   out-of-range month or day, or an unknown formula.
    /// - [`Error::InvalidExpression`] for a bad ordinal-weekday day.
    /// - [`Error::InvalidShiftDay`] for a bad shift weekday.
    pub fn from_definition(definition: &RuleDefinition) -> Result<Self> {
        let name = definition
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| invalid("<unnamed>", "name", "", "is mandatory"))?
            .to_string();

        let years = match &definition.years {
            Some(token) => parse_years(&name, token)?,
            None => return Err(invalid(&name, "years", "", "is mandatory")),
        };

        let occurrence = match (&definition.formula, &definition.month, &definition.day) {
            (Some(formula), None, None) => Occurrence::Formula(
                Formula::from_name(formula)
                    .ok_or_else(|| invalid(&name, "formula", formula, "unknown formula"))?,
            ),
            (Some(formula), _, _) => {
                return Err(invalid(
                    &name,
                    "formula",
                    formula,
                    "cannot be combined with month and day",
                ))
            }
            (None, Some(month), Some(day)) => {
                let month = parse_month(&name, month)?;
                parse_day(&name, month, day)?
            }
            (None, None, _) => {
                return Err(invalid(&name, "month", "", "month and day, or a formula, are mandatory"))
            }
            (None, Some(_), None) => {
                return Err(invalid(&name, "day", "", "is mandatory with a month"))
            }
        };

        Ok(Self {
            years,
            occurrence,
            shift_earlier_on: parse_shift_days("shift_earlier_on", &definition.shift_earlier_on)?,
            shift_later_on: parse_shift_days("shift_later_on", &definition.shift_later_on)?,
            name,
        })
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Years the rule applies to.
    pub fn years(&self) -> YearRange {
        self.years
    }

    /// How the date is found.
    pub fn occurrence(&self) -> &Occurrence {
        &self.occurrence
    }

    /// Weekdays on which the holiday moves to the previous working day.
    pub fn shift_earlier_on(&self) -> WeekdaySet {
        self.shift_earlier_on
    }

    /// Weekdays on which the holiday moves to the next working day.
    pub fn shift_later_on(&self) -> WeekdaySet {
        self.shift_later_on
    }

    /// Return `true` if the rule applies to `year`.
    pub fn applies_to_year(&self, year: Year) -> bool {
        self.years.contains(year)
    }

    /// The unadjusted date in `year`, or `None` if the rule does not apply
    /// or the calendar has no such day that year.
    pub fn date_for_year(&self, year: Year) -> Option<Date> {
        if !self.applies_to_year(year) {
            return None;
        }
        self.occurrence.resolve(year).ok()
    }

    /// Return `true` if `date` is the unadjusted date of this rule.
    pub fn occurs_on(&self, date: Date) -> bool {
        self.applies_to_year(date.year()) && self.occurrence.matches(date)
    }

    /// Which way a holiday falling on `weekday` must move, if at all.
    pub fn shift_direction(&self, weekday: Weekday) -> Option<Direction> {
        if self.shift_later_on.contains(weekday) {
            Some(Direction::Forward)
        } else if self.shift_earlier_on.contains(weekday) {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

impl TryFrom<&RuleDefinition> for HolidayRule {
    type Error = Error;

    fn try_from(definition: &RuleDefinition) -> Result<Self> {
        Self::from_definition(definition)
    }
}

impl TryFrom<RuleDefinition> for HolidayRule {
    type Error = Error;

    fn try_from(definition: RuleDefinition) -> Result<Self> {
        Self::from_definition(&definition)
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{:>16}: {}", "years", self.years)?;
        match &self.occurrence {
            Occurrence::FixedDay { month, day } => {
                writeln!(f, "{:>16}: {}", "month", month)?;
                write!(f, "{:>16}: {}", "day", day)?;
            }
            Occurrence::OrdinalWeekday {
                month,
                ordinal_weekday,
            } => {
                writeln!(f, "{:>16}: {}", "month", month)?;
                write!(f, "{:>16}: {}", "day", ordinal_weekday)?;
            }
            Occurrence::Formula(formula) => write!(f, "{:>16}: {}", "formula", formula)?,
        }
        if !self.shift_earlier_on.is_empty() {
            write!(f, "\n{:>16}: {}", "shift_earlier_on", self.shift_earlier_on)?;
        }
        if !self.shift_later_on.is_empty() {
            write!(f, "\n{:>16}: {}", "shift_later_on", self.shift_later_on)?;
        }
        Ok(())
    }
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

fn invalid(rule: &str, field: &'static str, value: impl ToString, reason: &str) -> Error {
    Error::InvalidRule {
        rule: rule.to_string(),
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_years(rule: &str, token: &YearsToken) -> Result<YearRange> {
    let bad = || invalid(rule, "years", token, "expected \"all\", a year or a range of years");
    let year = |n: i64| Year::try_from(n).map_err(|_| bad());
    let year_text = |s: &str| s.trim().parse::<Year>().map_err(|_| bad());
    let (first, last) = match token {
        YearsToken::Single(y) => (year(*y)?, year(*y)?),
        YearsToken::Range([a, b]) => (year(*a)?, year(*b)?),
        YearsToken::Text(text) if text.trim().eq_ignore_ascii_case("all") => {
            return Ok(YearRange::ALL)
        }
        YearsToken::Text(text) => match text.split_once("..") {
            Some((a, b)) => (year_text(a)?, year_text(b.trim_start_matches('='))?),
            None => {
                let y = year_text(text)?;
                (y, y)
            }
        },
    };
    YearRange::new(first, last).map_err(|_| invalid(rule, "years", token, "range is empty"))
}

fn parse_month(rule: &str, token: &MonthToken) -> Result<Month> {
    let month = match token {
        MonthToken::Number(n) => u8::try_from(*n).ok().and_then(Month::from_number),
        MonthToken::Name(name) => match name.trim().parse::<u8>() {
            Ok(n) => Month::from_number(n),
            Err(_) => Month::from_name(name),
        },
    };
    month.ok_or_else(|| invalid(rule, "month", token, "expected 1-12 or an English month name"))
}

fn parse_day(rule: &str, month: Month, token: &DayToken) -> Result<Occurrence> {
    let fixed = |n: i64| match u8::try_from(n) {
        Ok(day @ 1..=31) => Ok(Occurrence::FixedDay { month, day }),
        _ => Err(invalid(rule, "day", n, "expected 1-31")),
    };
    match token {
        DayToken::Number(n) => fixed(*n),
        DayToken::Expression(text) => match text.trim().parse::<i64>() {
            Ok(n) => fixed(n),
            Err(_) => Ok(Occurrence::OrdinalWeekday {
                month,
                ordinal_weekday: OrdinalWeekday::parse(text)?,
            }),
        },
    }
}

fn parse_shift_days(field: &'static str, tokens: &[WeekdayToken]) -> Result<WeekdaySet> {
    tokens
        .iter()
        .map(|token| {
            token.to_weekday().ok_or_else(|| Error::InvalidShiftDay {
                field,
                value: token.to_string(),
            })
        })
        .collect()
}

// ── HolidayRuleBuilder ────────────────────────────────────────────────────────

/// Builder for [`HolidayRule`].
///
/// ```
/// use hc_calendar::HolidayRule;
///
/// let christmas = HolidayRule::builder("Christmas Day")
///     .all_years()
///     .month("December")
///     .day(25)
///     .shift_later_on(["Saturday", "Sunday"])
///     .build()
///     .unwrap();
/// assert_eq!(christmas.name(), "Christmas Day");
/// ```
#[derive(Debug, Clone)]
pub struct HolidayRuleBuilder {
    definition: RuleDefinition,
}

impl HolidayRuleBuilder {
    /// Start a rule called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            definition: RuleDefinition {
                name: Some(name.into()),
                ..RuleDefinition::default()
            },
        }
    }

    /// Years the rule applies to.
    pub fn years(mut self, years: impl Into<YearsToken>) -> Self {
        self.definition.years = Some(years.into());
        self
    }

    /// Apply the rule to every year.
    pub fn all_years(self) -> Self {
        self.years(YearsToken::all())
    }

    /// Month of a fixed or ordinal-weekday occurrence.
    pub fn month(mut self, month: impl Into<MonthToken>) -> Self {
        self.definition.month = Some(month.into());
        self
    }

    /// Day of the month, or an ordinal-weekday expression.
    pub fn day(mut self, day: impl Into<DayToken>) -> Self {
        self.definition.day = Some(day.into());
        self
    }

    /// Name of a date formula.
    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.definition.formula = Some(formula.into());
        self
    }

    /// Weekdays on which the holiday moves to the previous working day.
    pub fn shift_earlier_on<I, T>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<WeekdayToken>,
    {
        self.definition.shift_earlier_on = days.into_iter().map(Into::into).collect();
        self
    }

    /// Weekdays on which the holiday moves to the next working day.
    pub fn shift_later_on<I, T>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<WeekdayToken>,
    {
        self.definition.shift_later_on = days.into_iter().map(Into::into).collect();
        self
    }

    /// The definition built so far.
    pub fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    /// Validate and build the rule.
    ///
    /// # Errors
    /// As [`HolidayRule::from_definition`].
    pub fn build(self) -> Result<HolidayRule> {
        HolidayRule::from_definition(&self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordinal_weekday::Ordinal;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn field_of(err: Error) -> &'static str {
        match err {
            Error::InvalidRule { field, .. } => field,
            other => panic!("expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn fixed_day_rule() {
        let rule = HolidayRule::builder("Christmas Day")
            .all_years()
            .month("December")
            .day(25)
            .shift_later_on(["Saturday", "Sunday"])
            .build()
            .unwrap();
        assert_eq!(rule.years(), YearRange::ALL);
        assert_eq!(
            rule.occurrence(),
            &Occurrence::FixedDay {
                month: Month::December,
                day: 25
            }
        );
        assert_eq!(rule.date_for_year(2010), Some(date(2010, 12, 25)));
        assert_eq!(rule.shift_direction(Weekday::Saturday), Some(Direction::Forward));
        assert_eq!(rule.shift_direction(Weekday::Monday), None);
        assert!(rule.occurs_on(date(1999, 12, 25)));
        assert!(!rule.occurs_on(date(1999, 12, 26)));
    }

    #[test]
    fn ordinal_weekday_rule() {
        let rule = HolidayRule::builder("Early May Bank Holiday")
            .years(1978..=9999)
            .month(5)
            .day("first_monday")
            .build()
            .unwrap();
        match rule.occurrence() {
            Occurrence::OrdinalWeekday {
                month,
                ordinal_weekday,
            } => {
                assert_eq!(*month, Month::May);
                assert_eq!(ordinal_weekday.ordinal(), Ordinal::First);
            }
            other => panic!("unexpected occurrence {other:?}"),
        }
        assert_eq!(rule.date_for_year(2010), Some(date(2010, 5, 3)));
        assert_eq!(rule.date_for_year(1970), None);
        assert!(rule.occurs_on(date(2011, 5, 2)));
    }

    #[test]
    fn formula_rule() {
        let rule = HolidayRule::builder("Good Friday")
            .all_years()
            .formula("ReligiousFestival.good_friday")
            .build()
            .unwrap();
        assert_eq!(rule.occurrence(), &Occurrence::Formula(Formula::GoodFriday));
        assert_eq!(rule.date_for_year(2008), Some(date(2008, 3, 21)));
        assert!(rule.occurs_on(date(2008, 3, 21)));
    }

    #[test]
    fn year_tokens() {
        let build = |years: YearsToken| {
            HolidayRule::builder("x").years(years).month(1).day(1).build()
        };
        assert_eq!(build(2012.into()).unwrap().years(), YearRange::single(2012));
        assert_eq!(
            build("1997..2006".into()).unwrap().years(),
            YearRange::new(1997, 2006).unwrap()
        );
        assert_eq!(build("ALL".into()).unwrap().years(), YearRange::ALL);
        assert_eq!(field_of(build("some".into()).unwrap_err()), "years");
        assert_eq!(field_of(build((2006..=1997).into()).unwrap_err()), "years");
    }

    #[test]
    fn occurrence_validation() {
        let both = HolidayRule::builder("x")
            .all_years()
            .month(1)
            .day(1)
            .formula("easter")
            .build();
        assert_eq!(field_of(both.unwrap_err()), "formula");

        let neither = HolidayRule::builder("x").all_years().build();
        assert_eq!(field_of(neither.unwrap_err()), "month");

        let no_day = HolidayRule::builder("x").all_years().month(1).build();
        assert_eq!(field_of(no_day.unwrap_err()), "day");

        let unknown = HolidayRule::builder("x").all_years().formula("diwali").build();
        assert_eq!(field_of(unknown.unwrap_err()), "formula");
    }

    #[test]
    fn range_validation() {
        let bad_month = HolidayRule::builder("x").all_years().month(13).day(1).build();
        assert_eq!(field_of(bad_month.unwrap_err()), "month");
        let bad_name = HolidayRule::builder("x").all_years().month("Smarch").day(1).build();
        assert_eq!(field_of(bad_name.unwrap_err()), "month");
        let bad_day = HolidayRule::builder("x").all_years().month(1).day(32).build();
        assert_eq!(field_of(bad_day.unwrap_err()), "day");
        let zero_day = HolidayRule::builder("x").all_years().month(1).day(0).build();
        assert_eq!(field_of(zero_day.unwrap_err()), "day");
    }

    #[test]
    fn missing_name_and_years() {
        let def = RuleDefinition {
            years: Some(YearsToken::all()),
            month: Some(1.into()),
            day: Some(1.into()),
            ..RuleDefinition::default()
        };
        assert_eq!(field_of(HolidayRule::from_definition(&def).unwrap_err()), "name");
        let no_years = HolidayRule::builder("x").month(1).day(1).build();
        assert_eq!(field_of(no_years.unwrap_err()), "years");
    }

    #[test]
    fn bad_expression_and_shift_days() {
        let bad_expr = HolidayRule::builder("x").all_years().month(5).day("first_mon").build();
        assert!(matches!(bad_expr, Err(Error::InvalidExpression { .. })));

        let bad_shift = HolidayRule::builder("x")
            .all_years()
            .month(1)
            .day(1)
            .shift_earlier_on([7])
            .build();
        assert_eq!(
            bad_shift.unwrap_err(),
            Error::InvalidShiftDay {
                field: "shift_earlier_on",
                value: "7".into()
            }
        );
    }

    #[test]
    fn shift_days_accept_numbers() {
        let rule = HolidayRule::builder("New Year's Day")
            .all_years()
            .month("January")
            .day(1)
            .shift_earlier_on([6])
            .shift_later_on([0])
            .build()
            .unwrap();
        assert_eq!(rule.shift_direction(Weekday::Saturday), Some(Direction::Backward));
        assert_eq!(rule.shift_direction(Weekday::Sunday), Some(Direction::Forward));
    }

    #[test]
    fn later_shift_wins_when_both_apply() {
        let rule = HolidayRule::builder("x")
            .all_years()
            .month(1)
            .day(1)
            .shift_earlier_on(["Saturday"])
            .shift_later_on(["Saturday"])
            .build()
            .unwrap();
        assert_eq!(rule.shift_direction(Weekday::Saturday), Some(Direction::Forward));
    }

    #[test]
    fn leap_day_rule_skips_common_years() {
        let rule = HolidayRule::builder("Leap Day")
            .all_years()
            .month(2)
            .day(29)
            .build()
            .unwrap();
        assert_eq!(rule.date_for_year(2012), Some(date(2012, 2, 29)));
        assert_eq!(rule.date_for_year(2011), None);
    }

    #[test]
    fn display_lists_fields() {
        let rule = HolidayRule::builder("Boxing Day")
            .all_years()
            .month(12)
            .day(26)
            .shift_later_on(["Saturday", "Sunday"])
            .build()
            .unwrap();
        let text = rule.to_string();
        assert!(text.starts_with("Boxing Day\n"));
        assert!(text.contains("           years: all"));
        assert!(text.contains("           month: December"));
        assert!(text.contains("  shift_later_on: [Saturday, Sunday]"));
    }
}
