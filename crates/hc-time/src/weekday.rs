//! `Weekday` — day-of-week enum, and `WeekdaySet`.

use hc_core::errors::{Error, Result};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).  Configuration
/// tokens use a separate *day number* convention, 0–6 with Sunday = 0; see
/// [`Weekday::from_day_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from a day number (0 = Sunday … 6 = Saturday).
    pub fn from_day_number(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1..=6 => Self::from_ordinal(n),
            _ => None,
        }
    }

    /// Construct from an English weekday name or its three-letter
    /// abbreviation, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|w| {
            w.long_name().eq_ignore_ascii_case(&lower) || w.short_name().eq_ignore_ascii_case(&lower)
        })
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the day number (0 = Sunday … 6 = Saturday).
    pub fn day_number(&self) -> u8 {
        *self as u8 % 7
    }

    /// Index into a Monday-first array of seven elements.
    pub fn index(&self) -> usize {
        *self as usize - 1
    }

    /// Return the three-letter abbreviation (`"Mon"`, `"Tue"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    /// Return the full name (`"Monday"`, `"Tuesday"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownWeekday {
            value: s.to_string(),
        })
    }
}

// ── WeekdaySet ────────────────────────────────────────────────────────────────

/// A set of weekdays stored as a 7-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekdaySet =
        WeekdaySet(1 << (Weekday::Saturday as u8 - 1) | 1 << (Weekday::Sunday as u8 - 1));

    /// Create an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Add a weekday. Returns `true` if it was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let was = self.contains(day);
        self.0 |= Self::bit(day);
        !was
    }

    /// Remove a weekday. Returns `true` if it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let was = self.contains(day);
        self.0 &= !Self::bit(day);
        was
    }

    /// Return `true` if `day` is in the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Number of weekdays in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every weekday is in the set.
    pub fn is_full(&self) -> bool {
        self.len() == 7
    }

    /// Return `true` if the two sets share a weekday.
    pub fn intersects(&self, other: WeekdaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate over the members, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(move |w| self.contains(*w))
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.index()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl std::fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(|w| w.long_name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
