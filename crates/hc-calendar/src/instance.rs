//! `HolidayInstance` — a rule materialized for one year.

use std::sync::Arc;

use hc_core::errors::Result;
use hc_core::Year;
use hc_time::{Date, Direction};

use crate::rule::HolidayRule;

/// Record of a weekend shift applied to a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjustment {
    /// Which way the holiday moved.
    pub direction: Direction,
    /// The date it moved from.
    pub from: Date,
}

impl Adjustment {
    /// `"carried forward from Sat 25 Dec 2010"` or
    /// `"brought forward from Sat 01 Jan 2011"`.
    pub fn note(&self) -> String {
        let verb = match self.direction {
            Direction::Forward => "carried",
            Direction::Backward => "brought",
        };
        format!("{verb} forward from {}", self.from.to_day_label())
    }
}

/// One occurrence of a [`HolidayRule`] in a specific year.
///
/// `year` is the year the rule was evaluated for.  After adjustment the
/// observed `date` may lie in a neighbouring year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayInstance {
    year: Year,
    rule: Arc<HolidayRule>,
    declaration_index: usize,
    unadjusted_date: Date,
    date: Date,
    adjustment: Option<Adjustment>,
}

impl HolidayInstance {
    /// Evaluate `rule` for `year`.  `declaration_index` is the rule's
    /// position in its calendar and breaks ties between same-day holidays.
    ///
    /// # Errors
    /// An error if the calendar has no such day in `year`.
    pub fn new(rule: Arc<HolidayRule>, declaration_index: usize, year: Year) -> Result<Self> {
        let unadjusted_date = rule.occurrence().resolve(year)?;
        Ok(Self {
            year,
            rule,
            declaration_index,
            unadjusted_date,
            date: unadjusted_date,
            adjustment: None,
        })
    }

    pub(crate) fn move_to(&mut self, date: Date, direction: Direction) {
        self.adjustment = Some(Adjustment {
            direction,
            from: self.date,
        });
        self.date = date;
    }

    /// The year the rule was evaluated for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The rule this instance came from.
    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    /// Position of the rule in its calendar's declaration order.
    pub fn declaration_index(&self) -> usize {
        self.declaration_index
    }

    /// The date the rule gives before any weekend shift.
    pub fn unadjusted_date(&self) -> Date {
        self.unadjusted_date
    }

    /// The observed date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The weekend shift applied, if any.
    pub fn adjustment(&self) -> Option<Adjustment> {
        self.adjustment
    }

    /// Return `true` if the holiday was moved off its unadjusted date.
    pub fn is_adjusted(&self) -> bool {
        self.adjustment.is_some()
    }

    /// The adjustment note, if the holiday was moved.
    pub fn adjustment_note(&self) -> Option<String> {
        self.adjustment.map(|a| a.note())
    }

    /// Holiday name, optionally followed by the adjustment note in
    /// parentheses.
    pub fn name(&self, include_adjustment_note: bool) -> String {
        match self.adjustment_note() {
            Some(note) if include_adjustment_note => format!("{} ({note})", self.rule.name()),
            _ => self.rule.name().to_string(),
        }
    }
}

impl std::fmt::Display for HolidayInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.date.to_day_label(), self.name(true))
    }
}
