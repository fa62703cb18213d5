//! Property tests over the England and Wales and United States calendars.

mod common;

use common::{uk, us};
use hc_calendar::{Date, Direction, OrdinalWeekday, WorkingCalendar};
use proptest::prelude::*;

// 1900-01-01 .. 2100-12-31
fn any_date() -> impl Strategy<Value = Date> {
    let first = Date::from_ymd(1900, 1, 1).unwrap().serial();
    let last = Date::from_ymd(2100, 12, 31).unwrap().serial();
    (first..=last).prop_map(|serial| Date::from_serial(serial).unwrap())
}

proptest! {
    /// Weekends are never public holidays, and a working day is exactly a
    /// day that is neither.
    #[test]
    fn working_day_is_neither_weekend_nor_holiday(d in any_date()) {
        for cal in [uk(), us()] {
            if cal.is_weekend(d) {
                prop_assert!(!cal.is_public_holiday(d));
            }
            prop_assert_eq!(
                cal.is_working_day(d),
                !cal.is_weekend(d) && !cal.is_public_holiday(d)
            );
        }
    }

    /// Stepping forward `n` working days and back again returns to an
    /// adjusted start.
    #[test]
    fn offset_round_trip(d in any_date(), n in 1u32..40) {
        let cal = uk();
        let start = cal.adjust(d, Direction::Forward).unwrap();
        let ahead = cal.offset_working_days(start, n, Direction::Forward).unwrap();
        prop_assert!(cal.is_working_day(ahead));
        prop_assert_eq!(cal.working_days_between(start, ahead), Ok(n));
        prop_assert_eq!(cal.offset_working_days(ahead, n, Direction::Backward), Ok(start));
    }

    /// Every observed holiday of a year lies in that year, is unique per
    /// date, and re-materializing after invalidation gives the same result.
    #[test]
    fn materialization_is_stable(year in 1900i32..2100) {
        let mut cal = us();
        let first = cal.holidays_for_year(year);
        for h in &first {
            prop_assert_eq!(h.date().year(), year);
        }
        let mut dates: Vec<Date> = first.iter().map(|h| h.date()).collect();
        dates.dedup();
        prop_assert_eq!(dates.len(), first.len());
        cal.invalidate();
        prop_assert_eq!(cal.holidays_for_year(year), first);
    }

    /// A date and the ordinal weekday derived from it agree with the
    /// expression that resolves back to that date.
    #[test]
    fn ordinal_weekday_round_trip(d in any_date()) {
        let derived = OrdinalWeekday::from_date(d);
        let resolved = derived.resolve(d.year(), d.month()).unwrap();
        prop_assert_eq!(resolved, d);
        prop_assert!(OrdinalWeekday::from_date(resolved).matches(&derived));
    }
}
