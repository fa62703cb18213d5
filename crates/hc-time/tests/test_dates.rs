//! Integration tests for `Date`, `WorkTime` and `DateTime`.

use hc_time::{Date, DateTime, Month, Weekday, WorkTime};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn known_weekdays() {
    assert_eq!(date(1, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(1752, 9, 14).weekday(), Weekday::Thursday);
    assert_eq!(date(2010, 12, 25).weekday(), Weekday::Saturday);
    assert_eq!(date(2011, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(9999, 12, 31).weekday(), Weekday::Friday);
}

#[test]
fn range_limits() {
    assert_eq!(date(1, 1, 1), Date::MIN);
    assert_eq!(date(9999, 12, 31), Date::MAX);
    assert!(Date::MAX.add_days(1).is_err());
    assert!(Date::MIN.add_days(-1).is_err());
    assert!(Date::from_ymd(0, 12, 31).is_err());
    assert!(Date::from_ymd(2011, 2, 29).is_err());
}

#[test]
fn day_labels() {
    assert_eq!(date(2009, 12, 26).to_day_label(), "Sat 26 Dec 2009");
    assert_eq!(date(2010, 12, 6).month_of_year(), Month::December);
}

#[test]
fn instants_order_by_date_then_time() {
    let morning = DateTime::from_ymd_hm(2010, 12, 6, 8, 45).unwrap();
    let later = morning.with_time(WorkTime::new(10, 25).unwrap());
    let next_day = DateTime::from_ymd_hm(2010, 12, 7, 0, 0).unwrap();
    assert!(morning < later);
    assert!(later < next_day);
    assert_eq!(later.to_string(), "Mon 06 Dec 2010 10:25");
}

proptest! {
    /// Consecutive serials step the weekday by one.
    #[test]
    fn weekday_cycles(serial in 1i32..3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let next = d + 1;
        prop_assert_eq!(next.weekday().index(), (d.weekday().index() + 1) % 7);
        prop_assert_eq!(d.days_between(next), 1);
    }

    /// Year, month and day reassemble into the same date.
    #[test]
    fn ymd_reassembles(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }
}
