//! `HolidayCalendar` — a territory's weekend days and holiday rules, with
//! holidays materialized one year at a time.
//!
//! # Materialization
//!
//! The first query touching year `Y` materializes it:
//!
//! 1. Every rule is evaluated for `Y - 1`, `Y` and `Y + 1`.  The instances
//!    are ordered by unadjusted date, then by rule declaration order.
//! 2. In that order, each instance whose weekday is in its rule's
//!    `shift_later_on` set walks forward, one day at a time, to the first day
//!    that is neither a weekend day nor already taken by another holiday of
//!    the pass.  Otherwise, if the weekday is in `shift_earlier_on`, it walks
//!    backward in the same way.
//! 3. The instances whose observed date lies in `Y` are kept.  This picks up
//!    holidays shifted across New Year (a 1 January holiday brought forward
//!    to 31 December, or a 31 December one carried into January) while
//!    their walks still see the neighbouring year's holidays.
//!
//! The pass is a pure function of the rules, the weekend and the year, so
//! neighbouring years are never consulted through the cache and the result
//! does not depend on query order.  Two instances only share a date when
//! neither was shifted; the first one kept wins and the other is logged at
//! `warn`.
//!
//! Any change to the rule set clears the cache.

use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, trace, warn};

use hc_core::errors::{Error, Result};
use hc_core::Year;
use hc_time::date::{MAX_YEAR, MIN_YEAR};
use hc_time::{Date, Direction, Weekday, WeekdaySet, WorkingCalendar};

use crate::definition::{CalendarDefinition, WeekdayToken};
use crate::instance::HolidayInstance;
use crate::rule::HolidayRule;
use crate::snapshot::HolidaySnapshot;

#[derive(Debug, Clone, Default)]
struct YearCache {
    materialized: BTreeSet<Year>,
    by_date: BTreeMap<Date, HolidayInstance>,
}

/// Public holidays and weekends of one territory.
///
/// Queries take `&self`; the per-year cache sits behind a mutex, so a
/// calendar can be shared between threads.  Rule changes take `&mut self`
/// and clear the cache.
pub struct HolidayCalendar {
    territory: String,
    weekend: WeekdaySet,
    rules: Vec<Arc<HolidayRule>>,
    cache: Mutex<YearCache>,
}

impl HolidayCalendar {
    /// Create a calendar from weekend-day tokens (names or day numbers
    /// 0 = Sunday … 6 = Saturday) and rules in declaration order.
    ///
    /// # Errors
    /// - [`Error::UnknownWeekday`] if a weekend token is not a weekday.
    /// - [`Error::InvalidArgument`] if every day of the week is a weekend.
    pub fn new<W, R>(
        territory: impl Into<String>,
        weekend_days: W,
        rules: R,
    ) -> Result<Self>
    where
        W: IntoIterator,
        W::Item: Into<WeekdayToken>,
        R: IntoIterator<Item = HolidayRule>,
    {
        let weekend = parse_weekend(weekend_days.into_iter().map(Into::into))?;
        Self::with_weekend(territory, weekend, rules)
    }

    /// Create a calendar from an already-built weekend set.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if every day of the week is a weekend.
    pub fn with_weekend(
        territory: impl Into<String>,
        weekend: WeekdaySet,
        rules: impl IntoIterator<Item = HolidayRule>,
    ) -> Result<Self> {
        hc_core::ensure!(
            !weekend.is_full(),
            Error::InvalidArgument("a calendar needs at least one non-weekend day".into())
        );
        Ok(Self {
            territory: territory.into(),
            weekend,
            rules: rules.into_iter().map(Arc::new).collect(),
            cache: Mutex::new(YearCache::default()),
        })
    }

    /// Build a calendar from a loader's definition, validating every rule.
    ///
    /// # Errors
    /// The first weekend or rule validation error.
    pub fn from_definition(definition: &CalendarDefinition) -> Result<Self> {
        let rules = definition
            .holidays
            .iter()
            .map(HolidayRule::from_definition)
            .collect::<Result<Vec<_>>>()?;
        Self::new(
            definition.territory.clone(),
            definition.weekend_days.iter().cloned(),
            rules,
        )
    }

    // ── Rule set ──────────────────────────────────────────────────────────────

    /// The rules, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &HolidayRule> + '_ {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The first rule called `name`.
    pub fn rule(&self, name: &str) -> Option<&HolidayRule> {
        self.rules().find(|r| r.name() == name)
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: HolidayRule) {
        debug!(territory = %self.territory, rule = rule.name(), "adding holiday rule");
        self.rules.push(Arc::new(rule));
        self.invalidate();
    }

    /// Append several rules, in order.
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = HolidayRule>) {
        let before = self.rules.len();
        self.rules.extend(rules.into_iter().map(Arc::new));
        debug!(
            territory = %self.territory,
            added = self.rules.len() - before,
            "adding holiday rules"
        );
        self.invalidate();
    }

    /// Remove every rule called `name`.  Returns `true` if any was removed.
    pub fn remove_rule(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.name() != name);
        let removed = before - self.rules.len();
        if removed == 0 {
            return false;
        }
        debug!(territory = %self.territory, rule = name, removed, "removed holiday rule");
        self.invalidate();
        true
    }

    /// Forget every materialized year.
    pub fn invalidate(&mut self) {
        let cache = self.cache.get_mut().unwrap_or_else(PoisonError::into_inner);
        if !cache.materialized.is_empty() {
            debug!(
                territory = %self.territory,
                years = cache.materialized.len(),
                rules = self.rules.len(),
                "invalidating holiday cache"
            );
        }
        *cache = YearCache::default();
    }

    // ── Weekends ──────────────────────────────────────────────────────────────

    /// Return `true` if `weekday` is a weekend day.
    pub fn is_weekend_day(&self, weekday: Weekday) -> bool {
        self.weekend.contains(weekday)
    }

    /// Return `true` if day number `n` (0 = Sunday … 6 = Saturday) is a
    /// weekend day.  Out-of-range numbers are not.
    pub fn weekend_day_number(&self, n: u8) -> bool {
        Weekday::from_day_number(n).is_some_and(|w| self.is_weekend_day(w))
    }

    // ── Holiday queries ───────────────────────────────────────────────────────

    /// Return `true` if the holidays of `year` are cached.
    pub fn is_materialized(&self, year: Year) -> bool {
        self.lock().materialized.contains(&year)
    }

    /// The cached years, ascending.
    pub fn materialized_years(&self) -> Vec<Year> {
        self.lock().materialized.iter().copied().collect()
    }

    /// The holiday observed on `date`, if any.
    ///
    /// Unlike [`WorkingCalendar::is_public_holiday`] this also reports
    /// holidays whose observed date falls on a weekend day.
    pub fn holiday(&self, date: Date) -> Option<HolidayInstance> {
        let mut cache = self.lock();
        self.ensure_year(&mut cache, date.year());
        cache.by_date.get(&date).cloned()
    }

    /// Every holiday observed in `year`, in date order.
    pub fn holidays_for_year(&self, year: Year) -> Vec<HolidayInstance> {
        let Some(range) = year_dates(year) else {
            return Vec::new();
        };
        let mut cache = self.lock();
        self.ensure_year(&mut cache, year);
        cache.by_date.range(range).map(|(_, h)| h.clone()).collect()
    }

    /// `(date, name with adjustment note)` for every holiday observed in
    /// `year`, in date order.
    pub fn list_for_year(&self, year: Year) -> Vec<(Date, String)> {
        self.holidays_for_year(year)
            .into_iter()
            .map(|h| (h.date(), h.name(true)))
            .collect()
    }

    /// Every holiday observed from `start` to `end` inclusive.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `start > end`.
    pub fn holidays_between(&self, start: Date, end: Date) -> Result<Vec<HolidayInstance>> {
        hc_core::ensure!(
            start <= end,
            Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            }
        );
        let mut cache = self.lock();
        for year in start.year()..=end.year() {
            self.ensure_year(&mut cache, year);
        }
        Ok(cache.by_date.range(start..=end).map(|(_, h)| h.clone()).collect())
    }

    /// The date `n` working days after `date`.
    ///
    /// # Errors
    /// [`Error::Date`] if the walk passes 9999-12-31.
    pub fn working_days_after(&self, date: Date, n: u32) -> Result<Date> {
        self.offset_working_days(date, n, Direction::Forward)
    }

    /// The date `n` working days before `date`.
    ///
    /// # Errors
    /// [`Error::Date`] if the walk passes 0001-01-01.
    pub fn working_days_before(&self, date: Date, n: u32) -> Result<Date> {
        self.offset_working_days(date, n, Direction::Backward)
    }

    /// Materialize `years` and freeze them into an immutable snapshot.
    pub fn snapshot(&self, years: RangeInclusive<Year>) -> HolidaySnapshot {
        let mut cache = self.lock();
        for year in years.clone() {
            self.ensure_year(&mut cache, year);
        }
        let by_date = cache
            .by_date
            .iter()
            .filter(|(d, _)| years.contains(&d.year()))
            .map(|(d, h)| (*d, h.clone()))
            .collect();
        HolidaySnapshot::new(self.territory.clone(), self.weekend, years, by_date)
    }

    // ── Materialization ───────────────────────────────────────────────────────

    fn lock(&self) -> std::sync::MutexGuard<'_, YearCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_year(&self, cache: &mut YearCache, year: Year) {
        if !cache.materialized.contains(&year) {
            self.materialize(cache, year);
        }
    }

    fn materialize(&self, cache: &mut YearCache, year: Year) {
        cache.materialized.insert(year);
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return;
        }
        let window = (year - 1).max(MIN_YEAR)..=(year + 1).min(MAX_YEAR);
        let landed: Vec<_> = self
            .adjustment_pass(window)
            .into_iter()
            .filter(|h| h.date().year() == year)
            .collect();
        debug!(
            territory = %self.territory,
            year,
            instances = landed.len(),
            brought_back = landed.iter().filter(|h| h.year() > year).count(),
            carried_in = landed.iter().filter(|h| h.year() < year).count(),
            "materializing holiday year"
        );

        for instance in landed {
            match cache.by_date.entry(instance.date()) {
                Entry::Vacant(slot) => {
                    slot.insert(instance);
                }
                Entry::Occupied(slot) => warn!(
                    territory = %self.territory,
                    date = %instance.date(),
                    kept = slot.get().rule().name(),
                    dropped = instance.rule().name(),
                    "holidays collide, dropping one"
                ),
            }
        }
    }

    /// Evaluate and adjust every rule for each of `years` in one pass,
    /// without touching the cache.
    fn adjustment_pass(&self, years: RangeInclusive<Year>) -> Vec<HolidayInstance> {
        let rules = &self.rules;
        let mut instances: Vec<HolidayInstance> = years
            .flat_map(move |year| {
                rules
                    .iter()
                    .enumerate()
                    .filter(move |(_, rule)| rule.applies_to_year(year))
                    .filter_map(move |(index, rule)| {
                        match HolidayInstance::new(Arc::clone(rule), index, year) {
                            Ok(instance) => Some(instance),
                            Err(err) => {
                                debug!(rule = rule.name(), year, %err, "holiday does not occur");
                                None
                            }
                        }
                    })
            })
            .collect();
        instances.sort_by_key(|h| (h.unadjusted_date(), h.declaration_index()));

        let mut taken: BTreeMap<Date, usize> = BTreeMap::new();
        for h in &instances {
            *taken.entry(h.date()).or_default() += 1;
        }

        for instance in &mut instances {
            let from = instance.date();
            let Some(direction) = instance.rule().shift_direction(from.weekday()) else {
                continue;
            };
            let Some(to) = self.next_free_day(from, direction, &taken) else {
                warn!(rule = instance.rule().name(), %from, "no free day to shift holiday to");
                continue;
            };
            if let Entry::Occupied(mut count) = taken.entry(from) {
                *count.get_mut() -= 1;
                if *count.get() == 0 {
                    count.remove();
                }
            }
            *taken.entry(to).or_default() += 1;
            trace!(rule = instance.rule().name(), %from, %to, %direction, "shifting holiday");
            instance.move_to(to, direction);
        }
        instances
    }

    fn next_free_day(
        &self,
        from: Date,
        direction: Direction,
        taken: &BTreeMap<Date, usize>,
    ) -> Option<Date> {
        let mut day = from;
        loop {
            day = day.add_days(direction.step()).ok()?;
            if !self.weekend.contains(day.weekday()) && !taken.contains_key(&day) {
                return Some(day);
            }
        }
    }
}

impl WorkingCalendar for HolidayCalendar {
    fn territory(&self) -> &str {
        &self.territory
    }

    fn weekend_days(&self) -> WeekdaySet {
        self.weekend
    }

    fn is_public_holiday(&self, date: Date) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        let mut cache = self.lock();
        self.ensure_year(&mut cache, date.year());
        cache.by_date.contains_key(&date)
    }

    fn holiday_name(&self, date: Date, include_adjustment_note: bool) -> Option<String> {
        if self.is_weekend(date) {
            return None;
        }
        self.holiday(date).map(|h| h.name(include_adjustment_note))
    }
}

impl Clone for HolidayCalendar {
    fn clone(&self) -> Self {
        Self {
            territory: self.territory.clone(),
            weekend: self.weekend,
            rules: self.rules.clone(),
            cache: Mutex::new(self.lock().clone()),
        }
    }
}

impl std::fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("territory", &self.territory)
            .field("weekend", &self.weekend)
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("materialized", &self.lock().materialized)
            .finish()
    }
}

fn parse_weekend(tokens: impl Iterator<Item = WeekdayToken>) -> Result<WeekdaySet> {
    tokens
        .map(|token| {
            token.to_weekday().ok_or_else(|| Error::UnknownWeekday {
                value: token.to_string(),
            })
        })
        .collect()
}

fn year_dates(year: Year) -> Option<RangeInclusive<Date>> {
    Some(Date::from_ymd(year, 1, 1).ok()?..=Date::from_ymd(year, 12, 31).ok()?)
}
