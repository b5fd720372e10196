//! Date formatting used across the dashboard

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "Jan 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Dec 2024"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Local clock time of a chat message, "10:01"
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Value for `<input type="date">`
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses a date input; empty or malformed text clears the date
pub fn parse_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 5)), "Jan 5, 2024");
        assert_eq!(format_month_year(date(2024, 12, 31)), "Dec 2024");
    }

    #[test]
    fn test_input_round_trip() {
        assert_eq!(input_value(Some(date(2024, 3, 15))), "2024-03-15");
        assert_eq!(input_value(None), "");
        assert_eq!(parse_input("2024-03-15"), Some(date(2024, 3, 15)));
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("15.03.2024"), None);
    }
}
