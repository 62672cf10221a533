//! Type definitions and constants for calendar formatting.

/// Width of a rendered month line: 7 two-char cells + 6 separators.
pub const MONTH_WIDTH: usize = 20;

pub const DAYS_PER_WEEK: usize = 7;

/// A month never spans more than 6 week rows.
pub const MAX_WEEKS: usize = 6;

/// Weekday label row for Sunday-start weeks.
pub const WEEKDAY_ROW: &str = "Su Mo Tu We Th Fr Sa";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated year/month pair to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthRequest {
    pub year: i32,
    /// 1-12, checked at construction.
    pub month: u32,
}

/// Day cells for a single month, row-major from the Sunday column of
/// the first week. `None` marks the blank cells before day 1; the
/// vector ends at the last day, so no blank trailing weeks exist.
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub days: Vec<Option<u32>>,
}
