//! Boundary types for rule and calendar definitions.
//!
//! Configuration loaders deserialize into these plain-data types and hand
//! them to [`HolidayRule::from_definition`](crate::HolidayRule::from_definition)
//! or [`HolidayCalendar::from_definition`](crate::HolidayCalendar::from_definition),
//! where all validation happens.  Field aliases accept the spellings used by
//! older territory files (`applicable_years`, `class_method`, `take_before`,
//! `take_after`, …).

use serde::{Deserialize, Serialize};

use hc_time::{Month, Weekday};

/// The years a rule applies to: `"all"`, a single year, a `[first, last]`
/// pair, or a `"first..last"` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearsToken {
    /// A single year.
    Single(i64),
    /// An inclusive `[first, last]` pair.
    Range([i64; 2]),
    /// `"all"`, a year, or `"first..last"`.
    Text(String),
}

impl YearsToken {
    /// Every year.
    pub fn all() -> Self {
        YearsToken::Text("all".into())
    }
}

impl From<i32> for YearsToken {
    fn from(year: i32) -> Self {
        YearsToken::Single(year.into())
    }
}

impl From<std::ops::RangeInclusive<i32>> for YearsToken {
    fn from(range: std::ops::RangeInclusive<i32>) -> Self {
        YearsToken::Range([(*range.start()).into(), (*range.end()).into()])
    }
}

impl From<&str> for YearsToken {
    fn from(text: &str) -> Self {
        YearsToken::Text(text.into())
    }
}

impl std::fmt::Display for YearsToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearsToken::Single(y) => write!(f, "{y}"),
            YearsToken::Range([a, b]) => write!(f, "[{a}, {b}]"),
            YearsToken::Text(s) => f.write_str(s),
        }
    }
}

/// A month as a number 1–12 or an English name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthToken {
    /// 1 = January … 12 = December.
    Number(i64),
    /// `"January"` … `"December"`.
    Name(String),
}

impl From<i32> for MonthToken {
    fn from(n: i32) -> Self {
        MonthToken::Number(n.into())
    }
}

impl From<&str> for MonthToken {
    fn from(name: &str) -> Self {
        MonthToken::Name(name.into())
    }
}

impl From<Month> for MonthToken {
    fn from(month: Month) -> Self {
        MonthToken::Number(month.number().into())
    }
}

impl std::fmt::Display for MonthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthToken::Number(n) => write!(f, "{n}"),
            MonthToken::Name(s) => f.write_str(s),
        }
    }
}

/// A fixed day of the month, or an ordinal-weekday expression such as
/// `"first_monday"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayToken {
    /// Day of the month.
    Number(i64),
    /// Ordinal-weekday expression.
    Expression(String),
}

impl From<i32> for DayToken {
    fn from(n: i32) -> Self {
        DayToken::Number(n.into())
    }
}

impl From<&str> for DayToken {
    fn from(expression: &str) -> Self {
        DayToken::Expression(expression.into())
    }
}

impl std::fmt::Display for DayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayToken::Number(n) => write!(f, "{n}"),
            DayToken::Expression(s) => f.write_str(s),
        }
    }
}

/// A weekday as a day number (0 = Sunday … 6 = Saturday) or a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekdayToken {
    /// 0 = Sunday … 6 = Saturday.
    Number(i64),
    /// Full or three-letter English name.
    Name(String),
}

impl WeekdayToken {
    /// The weekday this token denotes, if any.
    pub fn to_weekday(&self) -> Option<Weekday> {
        match self {
            WeekdayToken::Number(n) => u8::try_from(*n).ok().and_then(Weekday::from_day_number),
            WeekdayToken::Name(name) => Weekday::from_name(name),
        }
    }
}

impl From<i32> for WeekdayToken {
    fn from(n: i32) -> Self {
        WeekdayToken::Number(n.into())
    }
}

impl From<&str> for WeekdayToken {
    fn from(name: &str) -> Self {
        WeekdayToken::Name(name.into())
    }
}

impl From<Weekday> for WeekdayToken {
    fn from(day: Weekday) -> Self {
        WeekdayToken::Name(day.long_name().into())
    }
}

impl std::fmt::Display for WeekdayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekdayToken::Number(n) => write!(f, "{n}"),
            WeekdayToken::Name(s) => f.write_str(s),
        }
    }
}

/// One holiday rule as supplied by a configuration loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    /// Holiday name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Years the rule applies to.
    #[serde(default, alias = "applicable_years", skip_serializing_if = "Option::is_none")]
    pub years: Option<YearsToken>,
    /// Month of a fixed or ordinal-weekday occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthToken>,
    /// Day of a fixed or ordinal-weekday occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<DayToken>,
    /// Name of a date formula such as `good_friday`.
    #[serde(
        default,
        alias = "formula_reference",
        alias = "class_method",
        skip_serializing_if = "Option::is_none"
    )]
    pub formula: Option<String>,
    /// Weekdays on which the holiday moves to the previous working day.
    #[serde(
        default,
        alias = "take_before",
        alias = "shift_before_on",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub shift_earlier_on: Vec<WeekdayToken>,
    /// Weekdays on which the holiday moves to the next working day.
    #[serde(default, alias = "take_after", skip_serializing_if = "Vec::is_empty")]
    pub shift_later_on: Vec<WeekdayToken>,
}

/// A territory's weekend days and holiday rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarDefinition {
    /// Territory identifier.
    pub territory: String,
    /// Weekend days; Saturday and Sunday when omitted.
    #[serde(default = "default_weekend", alias = "weekend")]
    pub weekend_days: Vec<WeekdayToken>,
    /// Holiday rules, in declaration order.
    #[serde(default, alias = "public_holidays")]
    pub holidays: Vec<RuleDefinition>,
}

fn default_weekend() -> Vec<WeekdayToken> {
    vec![Weekday::Saturday.into(), Weekday::Sunday.into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_tokens() {
        assert_eq!(WeekdayToken::from(0).to_weekday(), Some(Weekday::Sunday));
        assert_eq!(WeekdayToken::from(6).to_weekday(), Some(Weekday::Saturday));
        assert_eq!(WeekdayToken::from(7).to_weekday(), None);
        assert_eq!(WeekdayToken::from(-1).to_weekday(), None);
        assert_eq!(WeekdayToken::from("sat").to_weekday(), Some(Weekday::Saturday));
        assert_eq!(WeekdayToken::from("Caturday").to_weekday(), None);
    }

    #[test]
    fn rule_definition_aliases() {
        let json = r#"{
            "name": "Good Friday",
            "applicable_years": "all",
            "class_method": "ReligiousFestival.good_friday"
        }"#;
        let def: RuleDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.years, Some(YearsToken::all()));
        assert_eq!(def.formula.as_deref(), Some("ReligiousFestival.good_friday"));
        assert!(def.shift_later_on.is_empty());

        let json = r#"{
            "name": "Christmas Day",
            "years": [1990, 2020],
            "month": "December",
            "day": 25,
            "take_after": ["Saturday", 0]
        }"#;
        let def: RuleDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.years, Some(YearsToken::Range([1990, 2020])));
        assert_eq!(def.month, Some(MonthToken::Name("December".into())));
        assert_eq!(def.day, Some(DayToken::Number(25)));
        assert_eq!(
            def.shift_later_on,
            vec![WeekdayToken::Name("Saturday".into()), WeekdayToken::Number(0)]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{ "name": "X", "years": "all", "month": 1, "day": 1, "colour": "red" }"#;
        assert!(serde_json::from_str::<RuleDefinition>(json).is_err());
    }

    #[test]
    fn calendar_definition_defaults_to_saturday_sunday() {
        let def: CalendarDefinition = serde_json::from_str(r#"{ "territory": "uk" }"#).unwrap();
        assert_eq!(def.weekend_days, default_weekend());
        assert!(def.holidays.is_empty());
    }
}
