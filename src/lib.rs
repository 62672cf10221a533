//! Minimal `cal`-style calendar display.
//!
//! Renders a single month as text: a centered `Month Year` header, a
//! weekday-label row, and date rows aligned to Sunday-start weeks.

pub mod args;
pub mod calendar;
pub mod formatter;
pub mod types;
