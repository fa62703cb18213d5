//! Integration tests for `WorkSchedule` over the England and Wales calendar,
//! with 09:00–17:30 working hours during the first week of December 2010.

mod common;

use common::{at, date, uk};
use hc_calendar::{Weekday, WorkSchedule, WorkTime};

fn t(h: u32, m: u32) -> WorkTime {
    WorkTime::new(h, m).unwrap()
}

#[test]
fn default_periods() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    let friday = s.period(Weekday::Friday);
    assert_eq!(friday.start().map(|w| w.minutes()), Some(9 * 60));
    assert_eq!(friday.end().map(|w| w.minutes()), Some(17 * 60 + 30));
    assert!(!s.period(Weekday::Saturday).is_working());
    assert!(!s.period(Weekday::Sunday).is_working());
}

#[test]
fn working_instants() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert!(!s.is_working_instant(at(2010, 12, 25, 11, 10)));
    assert!(!s.is_working_instant(at(2010, 12, 27, 11, 10)));
    assert!(!s.is_working_instant(at(2010, 12, 4, 14, 10)));
    assert!(!s.is_working_instant(at(2010, 12, 3, 8, 45)));
    assert!(!s.is_working_instant(at(2010, 12, 3, 18, 12)));
    assert!(s.is_working_instant(at(2010, 12, 3, 9, 0)));
    assert!(s.is_working_instant(at(2010, 12, 3, 10, 25)));
    assert!(s.is_working_instant(at(2010, 12, 3, 17, 30)));
}

#[test]
fn next_working_day_keeps_the_time() {
    let cal = uk();
    let mut s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(s.next_working_day(at(2010, 12, 2, 10, 25)), Ok(at(2010, 12, 3, 10, 25)));
    assert_eq!(s.next_working_day(at(2010, 12, 3, 10, 25)), Ok(at(2010, 12, 6, 10, 25)));
    assert_eq!(s.previous_working_day(at(2010, 12, 6, 10, 25)), Ok(at(2010, 12, 3, 10, 25)));

    // a half day on Saturdays
    s.set_day(Weekday::Saturday, t(9, 0), t(12, 30)).unwrap();
    assert_eq!(s.next_working_day(at(2010, 12, 3, 10, 25)), Ok(at(2010, 12, 4, 10, 25)));
    assert!(s.is_working_instant(at(2010, 12, 4, 12, 0)));
    assert!(!s.is_working_instant(at(2010, 12, 4, 14, 10)));
}

#[test]
fn start_of_day() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(s.start_of_day(at(2010, 12, 3, 8, 45)), Ok(at(2010, 12, 3, 9, 0)));
    assert_eq!(s.start_of_day(at(2010, 12, 3, 10, 25)), Ok(at(2010, 12, 3, 9, 0)));
    assert_eq!(s.start_of_day(at(2010, 12, 3, 18, 12)), Ok(at(2010, 12, 6, 9, 0)));
    assert_eq!(s.start_of_day(at(2010, 12, 5, 10, 25)), Ok(at(2010, 12, 6, 9, 0)));
    // a late instant on a non-working day still opens the next working day
    assert_eq!(s.start_of_day(at(2010, 12, 5, 23, 0)), Ok(at(2010, 12, 6, 9, 0)));
}

#[test]
fn end_of_day() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(s.end_of_day(at(2010, 12, 3, 10, 25)), Ok(at(2010, 12, 3, 17, 30)));
    assert_eq!(s.end_of_day(at(2010, 12, 3, 18, 12)), Ok(at(2010, 12, 3, 17, 30)));
    assert_eq!(s.end_of_day(at(2010, 12, 3, 8, 45)), Ok(at(2010, 12, 2, 17, 30)));
    assert_eq!(s.end_of_day(at(2010, 12, 6, 8, 45)), Ok(at(2010, 12, 3, 17, 30)));
    assert_eq!(s.end_of_day(at(2010, 12, 5, 10, 25)), Ok(at(2010, 12, 3, 17, 30)));
}

#[test]
fn working_time_normalization() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(s.working_time(at(2010, 12, 6, 10, 25)), Ok(at(2010, 12, 6, 10, 25)));
    assert_eq!(s.working_time(at(2010, 12, 3, 8, 45)), Ok(at(2010, 12, 3, 9, 0)));
    assert_eq!(s.working_time(at(2010, 12, 3, 18, 12)), Ok(at(2010, 12, 6, 9, 0)));
    assert_eq!(s.working_time(at(2010, 12, 4, 14, 10)), Ok(at(2010, 12, 6, 9, 0)));
    // Christmas Eve evening: the next opening skips the weekend and both
    // carried-forward holidays
    assert_eq!(s.working_time(at(2010, 12, 24, 19, 0)), Ok(at(2010, 12, 29, 9, 0)));

    assert_eq!(
        s.working_time_or_end_of_day(at(2010, 12, 6, 10, 25)),
        Ok(at(2010, 12, 6, 10, 25))
    );
    assert_eq!(
        s.working_time_or_end_of_day(at(2010, 12, 2, 18, 12)),
        Ok(at(2010, 12, 2, 17, 30))
    );
    assert_eq!(
        s.working_time_or_end_of_day(at(2010, 12, 5, 10, 25)),
        Ok(at(2010, 12, 3, 17, 30))
    );
    assert_eq!(
        s.working_time_or_end_of_day(at(2010, 12, 6, 8, 45)),
        Ok(at(2010, 12, 6, 9, 0))
    );
}

#[test]
fn elapsed_minutes_on_one_day() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 6, 10, 25), at(2010, 12, 6, 15, 43)),
        Ok(318)
    );
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 3, 10, 25), at(2010, 12, 3, 18, 12)),
        Ok(425)
    );
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 3, 8, 45), at(2010, 12, 3, 18, 12)),
        Ok(510)
    );
}

#[test]
fn elapsed_minutes_across_days() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    // Friday after closing to Monday morning: only Monday's minutes count
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 3, 18, 12), at(2010, 12, 6, 10, 25)),
        Ok(85)
    );
    // Friday before opening to Monday morning: all of Friday plus Monday's
    // minutes, nothing for the weekend.  The shorter statement of this case,
    // "only Monday's minutes count" (85), contradicts the day-by-day walk,
    // which credits the whole of Friday; the walk is what is implemented.
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 3, 8, 45), at(2010, 12, 6, 10, 25)),
        Ok(510 + 85)
    );
    // Thursday morning to the following Tuesday noon
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 2, 10, 25), at(2010, 12, 7, 12, 0)),
        Ok(425 + 510 + 510 + 180)
    );
    // across Christmas 2010: Fri 24th afternoon to Wed 29th 10:00
    assert_eq!(
        s.elapsed_working_minutes(at(2010, 12, 24, 16, 30), at(2010, 12, 29, 10, 0)),
        Ok(60 + 60)
    );
}

#[test]
fn minutes_to_end_of_day() {
    let cal = uk();
    let s = WorkSchedule::new(&cal, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(s.minutes_to_end_of_day(at(2010, 12, 6, 15, 43)), 107);
    assert_eq!(s.minutes_to_end_of_day(at(2010, 12, 6, 8, 0)), 510);
    assert_eq!(s.minutes_to_end_of_day(at(2010, 12, 27, 10, 0)), 0);
    assert_eq!(s.total_working_minutes(date(2010, 12, 6)), 510);
    assert_eq!(s.total_working_minutes(date(2010, 12, 27)), 0);
}

#[test]
fn schedule_over_a_snapshot() {
    let cal = uk();
    let snapshot = cal.snapshot(2010..=2011);
    let s = WorkSchedule::new(&snapshot, t(9, 0), t(17, 30)).unwrap();
    assert_eq!(s.working_time(at(2010, 12, 24, 19, 0)), Ok(at(2010, 12, 29, 9, 0)));
}
