//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! minical          // Current month
//! minical -m 4     // April of the current year
//! ```

use clap::Parser;
use clap::error::ErrorKind;

use minical::args::Args;
use minical::formatter::render_month;
use minical::types::MonthRequest;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return,
                _ => std::process::exit(1),
            }
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("minical: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let request = MonthRequest::new(args)?;
    println!("{}", render_month(&request));
    Ok(())
}
