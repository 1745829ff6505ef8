//! Clock and countdown formatting.

use chrono::{NaiveDate, NaiveTime};

/// `HH:MM:SS`, 24-hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// `January 5, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `MM:SS`. Minutes keep counting past 59 (`90:00`).
pub fn format_countdown(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        let t = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(format_clock(t), "07:05:09");
    }

    #[test]
    fn long_date_uses_english_months() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_long_date(d), "January 5, 2026");
        let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_long_date(d), "December 31, 2025");
    }

    #[test]
    fn countdown() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(1500), "25:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(90 * 60), "90:00");
    }
}
