//! Command-line argument parsing using clap.
//!
//! The month value is captured as a raw string so that validation
//! stays in library code and failures exit with code 1.

use chrono::Datelike;
use clap::Parser;

use crate::types::MonthRequest;

#[derive(Parser, Debug)]
#[command(name = "minical")]
#[command(about = "Displays a calendar for a single month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month to display (1-12). Defaults to the current month.
    #[arg(short = 'm', value_name = "month")]
    pub month: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a calendar for one month.

Without any arguments, display the current month.

Examples:
  minical          Display current month
  minical -m 4     Display April of the current year";

impl MonthRequest {
    pub fn new(args: &Args) -> Result<Self, String> {
        let today = get_today_date();

        let month = match args.month.as_deref() {
            Some(raw) => parse_month(raw)?,
            None => today.month(),
        };

        Ok(MonthRequest {
            year: today.year(),
            month,
        })
    }
}

/// Parse and validate a month argument (integer in 1-12).
pub fn parse_month(s: &str) -> Result<u32, String> {
    match s.parse::<i64>() {
        Ok(n) if (1..=12).contains(&n) => Ok(n as u32),
        _ => Err(format!("{}: bad month", s)),
    }
}

/// Get today's date, respecting MINICAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("MINICAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
