//! Calendar calculation logic using Zeller's congruence.

use chrono::Weekday;

use crate::types::{DAYS_PER_WEEK, MonthGrid};

/// Check if a year is a leap year under Gregorian rules.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Weekday of the first day of a month, via Zeller's congruence.
pub fn first_weekday(year: i32, month: u32) -> Weekday {
    let m = if month < 3 { month + 12 } else { month };
    let q: i32 = 1;
    let year_i = if month < 3 { year - 1 } else { year };
    let k: i32 = year_i % 100;
    let j: i32 = year_i / 100;

    let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        _ => unreachable!(),
    }
}

impl MonthGrid {
    /// Build the cell sequence for a month: leading blanks up to the
    /// first weekday column, then every day in order.
    pub fn new(year: i32, month: u32) -> Self {
        let total = days_in_month(year, month);
        let offset = first_weekday(year, month).num_days_from_sunday() as usize;

        let mut days: Vec<Option<u32>> = Vec::with_capacity(offset + total as usize);
        days.resize(offset, None);
        days.extend((1..=total).map(Some));

        MonthGrid { year, month, days }
    }

    /// Cells grouped into week rows; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.days.chunks(DAYS_PER_WEEK)
    }
}
