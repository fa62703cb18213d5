//! `WorkSchedule` — per-weekday working hours over a [`WorkingCalendar`].
//!
//! A date is a *working date* of the schedule when its weekday has a
//! working period and the calendar does not mark it as a public holiday.
//! Instants are [`DateTime`]s; instants outside working hours are
//! normalized forward (to the next opening) or backward (to the previous
//! closing) depending on the operation.

use hc_core::errors::{Error, Result};
use hc_core::Minutes;
use hc_time::{Date, DateTime, Direction, Weekday, WorkTime, WorkingCalendar};

use crate::work_period::WorkPeriod;

/// Working hours for each weekday, layered on a calendar.
#[derive(Debug, Clone)]
pub struct WorkSchedule<'a> {
    calendar: &'a dyn WorkingCalendar,
    periods: [WorkPeriod; 7],
}

impl<'a> WorkSchedule<'a> {
    /// Every non-weekend day works from `start` to `end`; weekend days do
    /// not work.
    ///
    /// # Errors
    /// - [`Error::InvalidWorkPeriod`] unless `end` is after `start`.
    /// - [`Error::InvalidArgument`] if the calendar leaves no working
    ///   weekday.
    pub fn new(calendar: &'a dyn WorkingCalendar, start: WorkTime, end: WorkTime) -> Result<Self> {
        let period = WorkPeriod::new(start, end)?;
        let weekend = calendar.weekend_days();
        let mut periods = [WorkPeriod::NonWorking; 7];
        for day in Weekday::ALL {
            if !weekend.contains(day) {
                periods[day.index()] = period;
            }
        }
        hc_core::ensure!(
            periods.iter().any(WorkPeriod::is_working),
            Error::InvalidArgument(format!(
                "calendar '{}' has no working weekday",
                calendar.territory()
            ))
        );
        Ok(Self { calendar, periods })
    }

    /// The underlying calendar.
    pub fn calendar(&self) -> &'a dyn WorkingCalendar {
        self.calendar
    }

    /// The working period of `weekday`.
    pub fn period(&self, weekday: Weekday) -> WorkPeriod {
        self.periods[weekday.index()]
    }

    /// Set the working hours of `weekday`.  This may turn a weekend day into
    /// a working day.
    ///
    /// # Errors
    /// [`Error::InvalidWorkPeriod`] unless `end` is after `start`.
    pub fn set_day(&mut self, weekday: Weekday, start: WorkTime, end: WorkTime) -> Result<()> {
        self.periods[weekday.index()] = WorkPeriod::new(start, end)?;
        Ok(())
    }

    /// [`set_day`](Self::set_day) with the weekday given by name.
    ///
    /// # Errors
    /// [`Error::UnknownWeekday`] for a bad name, otherwise as `set_day`.
    pub fn set_day_by_name(&mut self, name: &str, start: WorkTime, end: WorkTime) -> Result<()> {
        self.set_day(name.parse()?, start, end)
    }

    // ── Days ──────────────────────────────────────────────────────────────────

    /// Return `true` if `date` has working hours and is not a public holiday.
    pub fn is_working_day(&self, date: Date) -> bool {
        self.window(date).is_some()
    }

    /// Return `true` if `t` falls within working hours, both ends included.
    pub fn is_working_instant(&self, t: DateTime) -> bool {
        self.window(t.date())
            .is_some_and(|(start, end)| start <= t.time() && t.time() <= end)
    }

    /// The same time of day on the next working date.
    ///
    /// # Errors
    /// [`Error::Date`] if no working date follows before the end of the
    /// date range.
    pub fn next_working_day(&self, t: DateTime) -> Result<DateTime> {
        let (date, ..) = self.step_to_working(t.date(), Direction::Forward)?;
        Ok(t.with_date(date))
    }

    /// The same time of day on the previous working date.
    ///
    /// # Errors
    /// [`Error::Date`] if no working date precedes `t` in the date range.
    pub fn previous_working_day(&self, t: DateTime) -> Result<DateTime> {
        let (date, ..) = self.step_to_working(t.date(), Direction::Backward)?;
        Ok(t.with_date(date))
    }

    /// Working minutes on `date`; zero on non-working dates.
    pub fn total_working_minutes(&self, date: Date) -> Minutes {
        self.window(date)
            .map_or(0, |(start, end)| end.minutes_since(start))
    }

    // ── Normalization ─────────────────────────────────────────────────────────
    //
    // Each of these fails with `Error::Date` only when the walk to the next
    // or previous working date runs off the date range.

    /// Opening time of `t`'s date, or of the next working date if `t` is on
    /// a non-working date or after closing.
    pub fn start_of_day(&self, t: DateTime) -> Result<DateTime> {
        match self.window(t.date()) {
            Some((start, end)) if t.time() <= end => Ok(DateTime::new(t.date(), start)),
            _ => self.next_opening(t.date()),
        }
    }

    /// Closing time of `t`'s date, or of the previous working date if `t` is
    /// on a non-working date or before opening.
    pub fn end_of_day(&self, t: DateTime) -> Result<DateTime> {
        match self.window(t.date()) {
            Some((start, end)) if t.time() >= start => Ok(DateTime::new(t.date(), end)),
            _ => self.previous_closing(t.date()),
        }
    }

    /// `t` if it is within working hours, otherwise the next opening time.
    pub fn working_time(&self, t: DateTime) -> Result<DateTime> {
        match self.window(t.date()) {
            Some((start, end)) if t.time() <= end => Ok(t.with_time(t.time().max(start))),
            _ => self.next_opening(t.date()),
        }
    }

    /// `t` if it is within working hours; the day's closing time if after
    /// hours; the day's opening time if before hours; the previous closing
    /// time on non-working dates.
    pub fn working_time_or_end_of_day(&self, t: DateTime) -> Result<DateTime> {
        match self.window(t.date()) {
            Some((start, end)) => Ok(t.with_time(t.time().clamp(start, end))),
            None => self.previous_closing(t.date()),
        }
    }

    // ── Minutes ───────────────────────────────────────────────────────────────

    /// Working minutes on `t`'s date up to `t`.
    pub fn minutes_worked_until(&self, t: DateTime) -> Minutes {
        self.window(t.date()).map_or(0, |(start, end)| {
            t.time().clamp(start, end).minutes_since(start)
        })
    }

    /// Working minutes on `t`'s date from `t` until closing.
    pub fn minutes_to_end_of_day(&self, t: DateTime) -> Minutes {
        self.window(t.date()).map_or(0, |(start, end)| {
            end.minutes_since(t.time().clamp(start, end))
        })
    }

    /// Working minutes elapsed between `a` and `b`.
    ///
    /// `a` is moved forward to the next working instant and `b` back to the
    /// closing time of its day (or of the previous working date).  On one
    /// date the result is the difference of the two times; across dates it
    /// is the rest of `a`'s day, plus every full working date in between,
    /// plus the minutes worked on `b`'s date.
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] unless `a < b`.
    /// - [`Error::Date`] if normalizing `a` or `b` runs off the date range.
    pub fn elapsed_working_minutes(&self, a: DateTime, b: DateTime) -> Result<Minutes> {
        hc_core::ensure!(
            a < b,
            Error::InvalidRange {
                start: a.to_string(),
                end: b.to_string(),
            }
        );
        let start = self.working_time(a)?;
        let end = self.working_time_or_end_of_day(b)?;
        if end <= start {
            return Ok(0);
        }
        if start.date() == end.date() {
            return Ok(end.time().minutes_since(start.time()));
        }

        let mut minutes = self.minutes_to_end_of_day(start);
        let mut date = start.date();
        loop {
            let (next, opening, closing) = self.step_to_working(date, Direction::Forward)?;
            if next >= end.date() {
                minutes += end.time().minutes_since(opening);
                return Ok(minutes);
            }
            minutes += closing.minutes_since(opening);
            date = next;
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Opening and closing time of `date`, if it is a working date.
    fn window(&self, date: Date) -> Option<(WorkTime, WorkTime)> {
        let bounds = self.period(date.weekday()).bounds()?;
        (!self.calendar.is_public_holiday(date)).then_some(bounds)
    }

    /// The first working date strictly after (or before) `date`, with its
    /// opening and closing times.
    fn step_to_working(
        &self,
        mut date: Date,
        direction: Direction,
    ) -> Result<(Date, WorkTime, WorkTime)> {
        loop {
            date = date.add_days(direction.step())?;
            if let Some((start, end)) = self.window(date) {
                return Ok((date, start, end));
            }
        }
    }

    fn next_opening(&self, date: Date) -> Result<DateTime> {
        let (date, start, _) = self.step_to_working(date, Direction::Forward)?;
        Ok(DateTime::new(date, start))
    }

    fn previous_closing(&self, date: Date) -> Result<DateTime> {
        let (date, _, end) = self.step_to_working(date, Direction::Backward)?;
        Ok(DateTime::new(date, end))
    }
}
