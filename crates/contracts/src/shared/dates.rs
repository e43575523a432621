//! Date parsing shared by the batch aggregate and the public view.
//!
//! The API is not consistent about date encoding: batch dates arrive either as
//! plain `YYYY-MM-DD` or as full RFC 3339 timestamps. Everything is normalised
//! to `DateTime<Utc>`; plain dates become midnight UTC.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Milliseconds in one day
pub const DAY_MS: i64 = 86_400_000;

/// Format used by `<input type="date">` and by the batch endpoints
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date coming from the API
pub fn parse_api_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // "2024-01-01" or "2024-01-01T00:00:00" without an offset
    let date_part = raw.get(..10)?;
    let date = NaiveDate::parse_from_str(date_part, INPUT_DATE_FORMAT).ok()?;
    Some(start_of_day(date))
}

/// Parse the value of a date input
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).ok()
}

/// Midnight UTC of the given date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// Value suitable for `<input type="date">`
pub fn to_input_date(dt: &DateTime<Utc>) -> String {
    dt.format(INPUT_DATE_FORMAT).to_string()
}

/// Serde adapter for required API dates
pub mod api_date {
    use super::parse_api_date;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_api_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

/// Serde adapter for optional API dates; unparseable values become `None`
pub mod api_date_opt {
    use super::parse_api_date;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse_api_date))
    }
}

/// RFC 3339 with millisecond precision, as the API emits it
pub fn to_api_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_api_date("2024-03-15").unwrap();
        assert_eq!(to_input_date(&dt), "2024-03-15");
        assert_eq!(to_api_timestamp(&dt), "2024-03-15T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_api_date("2024-03-15T23:30:00+02:00").unwrap();
        assert_eq!(to_api_timestamp(&dt), "2024-03-15T21:30:00.000Z");
    }

    #[test]
    fn test_parse_naive_timestamp_keeps_date() {
        let dt = parse_api_date("2024-03-15T10:00:00").unwrap();
        assert_eq!(to_input_date(&dt), "2024-03-15");
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_api_date("").is_none());
        assert!(parse_api_date("not a date").is_none());
        assert!(parse_input_date("15.03.2024").is_none());
        assert_eq!(
            parse_input_date(" 2024-03-15 "),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }
}
