//! Date display helpers.
//!
//! Dates are shown as DD.MM.YYYY throughout the dashboard.

use chrono::{DateTime, Utc};

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&date), "15.03.2024");
    }

    #[test]
    fn test_format_date_pads_day_and_month() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "05.01.2025");
    }
}
