// Test fixtures - reusable test data
// Provides consistent clinic schedules and dates across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, Weekday};
use clinic_calendar::models::working_hours::{BreakPeriod, WorkingHoursConfig};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, Mar 10, 2024
    pub fn sunday_mar_10_2024() -> NaiveDate {
        ymd(2024, 3, 10)
    }

    /// Tuesday, Mar 12, 2024
    pub fn tuesday_mar_12_2024() -> NaiveDate {
        ymd(2024, 3, 12)
    }

    /// Wednesday, Mar 13, 2024
    pub fn wednesday_mar_13_2024() -> NaiveDate {
        ymd(2024, 3, 13)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample working hours for testing
pub mod schedules {
    use super::*;

    /// 08:00-18:00 in 30 minute slots with a 12:00-12:30 lunch, seven days a week
    pub fn clinic_with_lunch() -> WorkingHoursConfig {
        WorkingHoursConfig::new(hm(8, 0), hm(18, 0), 30)
            .with_break(BreakPeriod::new("Lunch", hm(12, 0), hm(12, 30)))
            .with_working_days(all_week())
    }

    /// Short surgery morning in 15 minute slots with a coffee break
    pub fn surgery_morning() -> WorkingHoursConfig {
        WorkingHoursConfig::new(hm(7, 30), hm(11, 0), 15)
            .with_break(BreakPeriod::new("Coffee", hm(9, 0), hm(9, 15)))
            .with_working_days(all_week())
    }

    pub fn all_week() -> [Weekday; 7] {
        [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
    }
}
