//! Easter Sunday and the moveable feasts derived from it.
//!
//! Years up to and including 1752 use the Julian computus, later years the
//! Gregorian one.  The resulting day and month are always labelled as a
//! proleptic Gregorian [`Date`].

use hc_core::errors::Result;
use hc_core::Year;
use hc_time::Date;

/// Easter Sunday of `year`.
///
/// # Errors
/// An error if `year` is outside the representable date range.
pub fn easter(year: Year) -> Result<Date> {
    let golden = year.rem_euclid(19) + 1;
    let (mut dominical, mut full_moon) = if year <= 1752 {
        (
            (year + year.div_euclid(4) + 5).rem_euclid(7),
            (3 - 11 * golden - 7).rem_euclid(30),
        )
    } else {
        let solar = (year - 1600).div_euclid(100) - (year - 1600).div_euclid(400);
        let lunar = ((year - 1400).div_euclid(100) * 8).div_euclid(25);
        (
            (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400))
                .rem_euclid(7),
            (3 - 11 * golden + solar - lunar).rem_euclid(30),
        )
    };
    if dominical == 0 {
        dominical = 7;
    }
    if full_moon == 0 {
        full_moon = 30;
    }
    if full_moon == 29 || (full_moon == 28 && golden > 11) {
        full_moon -= 1;
    }
    let difference = (4 - full_moon - dominical).rem_euclid(7);
    let day = full_moon + difference + 1;
    if day < 11 {
        Date::from_ymd(year, 3, (day + 21) as u8)
    } else {
        Date::from_ymd(year, 4, (day - 10) as u8)
    }
}

fn from_easter(year: Year, days: i32) -> Result<Date> {
    easter(year)?.add_days(days)
}

/// Good Friday, two days before Easter.
pub fn good_friday(year: Year) -> Result<Date> {
    from_easter(year, -2)
}

/// Easter Monday.
pub fn easter_monday(year: Year) -> Result<Date> {
    from_easter(year, 1)
}

/// Palm Sunday, a week before Easter.
pub fn palm_sunday(year: Year) -> Result<Date> {
    from_easter(year, -7)
}

/// Ash Wednesday, 46 days before Easter.
pub fn ash_wednesday(year: Year) -> Result<Date> {
    from_easter(year, -46)
}

/// Ascension Day, 39 days after Easter.
pub fn ascension_day(year: Year) -> Result<Date> {
    from_easter(year, 39)
}

/// Pentecost (Whit Sunday), 49 days after Easter.
pub fn pentecost(year: Year) -> Result<Date> {
    from_easter(year, 49)
}

/// Whit Monday, 50 days after Easter.
pub fn whit_monday(year: Year) -> Result<Date> {
    from_easter(year, 50)
}

/// A named date formula that rules can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    /// [`easter`]
    Easter,
    /// [`good_friday`]
    GoodFriday,
    /// [`easter_monday`]
    EasterMonday,
    /// [`palm_sunday`]
    PalmSunday,
    /// [`ash_wednesday`]
    AshWednesday,
    /// [`ascension_day`]
    AscensionDay,
    /// [`pentecost`]
    Pentecost,
    /// [`whit_monday`]
    WhitMonday,
}

// Lookup names, aliases included.
const NAMES: &[(&str, Formula)] = &[
    ("easter", Formula::Easter),
    ("easter_sunday", Formula::Easter),
    ("good_friday", Formula::GoodFriday),
    ("easter_monday", Formula::EasterMonday),
    ("palm_sunday", Formula::PalmSunday),
    ("ash_wednesday", Formula::AshWednesday),
    ("ascension_day", Formula::AscensionDay),
    ("pentecost", Formula::Pentecost),
    ("whit_sunday", Formula::Pentecost),
    ("whit_monday", Formula::WhitMonday),
];

impl Formula {
    /// Every formula, in declaration order.
    pub const ALL: [Formula; 8] = [
        Formula::Easter,
        Formula::GoodFriday,
        Formula::EasterMonday,
        Formula::PalmSunday,
        Formula::AshWednesday,
        Formula::AscensionDay,
        Formula::Pentecost,
        Formula::WhitMonday,
    ];

    /// Look a formula up by name, ignoring case.  A qualified reference such
    /// as `ReligiousFestival.good_friday` resolves on its last segment.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.rsplit(|c: char| c == '.' || c == ':').next().unwrap_or(name).trim();
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(key))
            .map(|&(_, formula)| formula)
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Formula::Easter => "easter",
            Formula::GoodFriday => "good_friday",
            Formula::EasterMonday => "easter_monday",
            Formula::PalmSunday => "palm_sunday",
            Formula::AshWednesday => "ash_wednesday",
            Formula::AscensionDay => "ascension_day",
            Formula::Pentecost => "pentecost",
            Formula::WhitMonday => "whit_monday",
        }
    }

    /// The date this formula gives for `year`.
    ///
    /// # Errors
    /// An error if `year` is outside the representable date range.
    pub fn evaluate(&self, year: Year) -> Result<Date> {
        match self {
            Formula::Easter => easter(year),
            Formula::GoodFriday => good_friday(year),
            Formula::EasterMonday => easter_monday(year),
            Formula::PalmSunday => palm_sunday(year),
            Formula::AshWednesday => ash_wednesday(year),
            Formula::AscensionDay => ascension_day(year),
            Formula::Pentecost => pentecost(year),
            Formula::WhitMonday => whit_monday(year),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
