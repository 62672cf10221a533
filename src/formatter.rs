//! Text layout for the month view: header centering, weekday labels,
//! and date rows.

use unicode_width::UnicodeWidthStr;

use crate::types::{MAX_WEEKS, MONTH_NAMES, MONTH_WIDTH, MonthGrid, MonthRequest, WEEKDAY_ROW};

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Format the `Month Year` header, centered within the month width.
///
/// Padding is prepended only: `floor((width - text) / 2)` spaces, with
/// no trailing pad past the natural end of the string.
pub fn format_header(year: i32, month: u32) -> String {
    let title = format!("{} {}", month_name(month), year);
    let padding = MONTH_WIDTH.saturating_sub(title.width()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format the date rows: two-char right-justified cells joined by
/// single spaces, one line per week, trailing whitespace trimmed.
/// Emission stops at the week containing the last day.
pub fn format_date_rows(grid: &MonthGrid) -> String {
    let mut lines = Vec::with_capacity(MAX_WEEKS);

    for week in grid.weeks() {
        let row = week
            .iter()
            .map(|cell| match cell {
                Some(day) => format!("{:>2}", day),
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

/// Render the full month view: header, weekday row, date rows.
pub fn render_month(request: &MonthRequest) -> String {
    let grid = MonthGrid::new(request.year, request.month);
    format!(
        "{}\n{}\n{}",
        format_header(grid.year, grid.month),
        WEEKDAY_ROW,
        format_date_rows(&grid)
    )
}
