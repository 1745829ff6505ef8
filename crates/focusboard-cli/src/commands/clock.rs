use chrono::Local;
use focusboard_core::clock::{format_clock, format_long_date};

/// Print the local time and date.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let now = Local::now();
    println!("{}", format_clock(now.time()));
    println!("{}", format_long_date(now.date_naive()));
    Ok(())
}
