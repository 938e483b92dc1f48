//! Date parsing shared by the upload parsers
//!
//! Each parser tries an ordered list of formats and keeps the first match.
//! Anything that matches none of them is "unset" (`None`), never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats accepted in CSV uploads, in priority order
pub const CSV_DATE_FORMATS: &[&str] = &["%Y.%m.%d", "%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Formats accepted in JSON uploads, in priority order
pub const JSON_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d"];

/// Parses `input` against `formats`, first match wins
pub fn parse_date(input: &str, formats: &[&str]) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// CSV date parsing: the CSV format list, then full timestamps
pub fn parse_csv_date(input: &str) -> Option<NaiveDate> {
    parse_date(input, CSV_DATE_FORMATS).or_else(|| parse_timestamp_date(input.trim()))
}

/// JSON date parsing: the JSON format list only
pub fn parse_json_date(input: Option<&str>) -> Option<NaiveDate> {
    input.and_then(|s| parse_date(s, JSON_DATE_FORMATS))
}

fn parse_timestamp_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test_case("2022.03.15", ymd(2022, 3, 15) ; "dotted")]
    #[test_case("2022-03-15", ymd(2022, 3, 15) ; "dashed")]
    #[test_case("03/15/2022", ymd(2022, 3, 15) ; "us slashes")]
    #[test_case("3/5/2022", ymd(2022, 3, 5) ; "us short")]
    #[test_case("25/03/2022", ymd(2022, 3, 25) ; "day first when month impossible")]
    #[test_case("2022/03/15", ymd(2022, 3, 15) ; "year first slashes")]
    #[test_case("2022-03-15T10:30:00Z", ymd(2022, 3, 15) ; "rfc3339")]
    #[test_case("2022-03-15 10:30:00", ymd(2022, 3, 15) ; "naive timestamp")]
    #[test_case("not-a-date", None ; "garbage")]
    #[test_case("", None ; "empty")]
    #[test_case("2022.02.30", None ; "impossible day")]
    fn test_parse_csv_date(input: &str, expected: Option<NaiveDate>) {
        assert_eq!(parse_csv_date(input), expected);
    }

    #[test]
    fn test_ambiguous_slash_date_prefers_month_first() {
        assert_eq!(parse_csv_date("05/03/2024"), ymd(2024, 5, 3));
    }

    #[test]
    fn test_parse_json_date() {
        assert_eq!(parse_json_date(Some("2023-05-20")), ymd(2023, 5, 20));
        assert_eq!(parse_json_date(Some("2023.05.20")), ymd(2023, 5, 20));
        assert_eq!(parse_json_date(Some("05/20/2023")), None);
        assert_eq!(parse_json_date(Some("  ")), None);
        assert_eq!(parse_json_date(None), None);
    }
}
