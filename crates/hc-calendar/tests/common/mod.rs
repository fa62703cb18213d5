//! Territory fixtures shared by the integration tests.

#![allow(dead_code)]

use hc_calendar::{CalendarDefinition, Date, DateTime, HolidayCalendar};

pub fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

pub fn at(y: i32, m: u8, d: u8, h: u32, mi: u32) -> DateTime {
    DateTime::from_ymd_hm(y, m, d, h, mi).unwrap()
}

pub fn calendar_from_json(json: &str) -> HolidayCalendar {
    let definition: CalendarDefinition = serde_json::from_str(json).unwrap();
    HolidayCalendar::from_definition(&definition).unwrap()
}

/// England and Wales bank holidays.
pub fn uk() -> HolidayCalendar {
    calendar_from_json(
        r#"{
        "territory": "uk_en",
        "weekend": ["Saturday", "Sunday"],
        "public_holidays": [
            { "name": "New Year's Day", "years": "all", "month": "January", "day": 1,
              "take_after": ["Saturday", "Sunday"] },
            { "name": "Good Friday", "years": "all", "class_method": "ReligiousFestival.good_friday" },
            { "name": "Easter Monday", "years": "all", "class_method": "ReligiousFestival.easter_monday" },
            { "name": "May Day", "years": "all", "month": "May", "day": "first_monday" },
            { "name": "Spring Bank Holiday", "years": "all", "month": "May", "day": "last_monday" },
            { "name": "Summer Bank Holiday", "years": "all", "month": "August", "day": "last_monday" },
            { "name": "Christmas Day", "years": "all", "month": "December", "day": 25,
              "take_after": ["Saturday", "Sunday"] },
            { "name": "Boxing Day", "years": "all", "month": "December", "day": 26,
              "take_after": ["Saturday", "Sunday"] }
        ]
    }"#,
    )
}

/// United States federal holidays.
pub fn us() -> HolidayCalendar {
    calendar_from_json(
        r#"{
        "territory": "us",
        "weekend_days": [0, 6],
        "holidays": [
            { "name": "New Year's Day", "years": "all", "month": 1, "day": 1,
              "shift_earlier_on": ["Saturday"], "shift_later_on": ["Sunday"] },
            { "name": "Birthday of Martin Luther King, Jr.", "years": "1986..9999",
              "month": 1, "day": "third_monday" },
            { "name": "Washington's Birthday", "years": "all", "month": 2, "day": "third_monday" },
            { "name": "Memorial Day", "years": "all", "month": 5, "day": "last_monday" },
            { "name": "Independence Day", "years": "all", "month": 7, "day": 4,
              "shift_earlier_on": ["Saturday"], "shift_later_on": ["Sunday"] },
            { "name": "Labor Day", "years": "all", "month": 9, "day": "first_monday" },
            { "name": "Columbus Day", "years": "all", "month": 10, "day": "second_monday" },
            { "name": "Veterans' Day", "years": "all", "month": 11, "day": 11,
              "shift_earlier_on": ["Saturday"], "shift_later_on": ["Sunday"] },
            { "name": "Thanksgiving Day", "years": "all", "month": 11, "day": "fourth_thursday" },
            { "name": "Christmas Day", "years": "all", "month": 12, "day": 25,
              "shift_earlier_on": ["Saturday"], "shift_later_on": ["Sunday"] }
        ]
    }"#,
    )
}
