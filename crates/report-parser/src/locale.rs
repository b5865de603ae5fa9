use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Datetime spellings seen across the dialects, tried in order after
/// dot-to-slash normalization. Seconds-bearing formats come first so they
/// are not truncated by their minute-precision variants.
const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%m/%d/%Y"];

/// Parses a number that may carry spaces as thousands separators and a
/// comma as the decimal point.
///
/// When both a comma and a dot are present, the commas are thousands
/// separators; a lone comma is a decimal comma.
pub fn parse_locale_number(raw: &str) -> Option<Decimal> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let normalized = if compact.contains('.') {
        compact.replace(',', "")
    } else {
        compact.replace(',', ".")
    };
    Decimal::from_str(&normalized).ok()
}

/// Parses the close-time spellings the report dialects use.
///
/// Dot-separated dates (`2024.01.05`) are normalized to slashes before the
/// known formats are tried; date-only values resolve to midnight.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim().replace('.', "/");

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_and_comma_decimal_numbers() {
        assert_eq!(parse_locale_number("10.5"), Some(dec!(10.5)));
        assert_eq!(parse_locale_number("-50,25"), Some(dec!(-50.25)));
        assert_eq!(parse_locale_number("1 234,56"), Some(dec!(1234.56)));
        assert_eq!(parse_locale_number("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_locale_number("0"), Some(dec!(0)));
    }

    #[test]
    fn rejects_unparsable_numbers() {
        assert_eq!(parse_locale_number(""), None);
        assert_eq!(parse_locale_number("   "), None);
        assert_eq!(parse_locale_number("n/a"), None);
        assert_eq!(parse_locale_number("1.2.3"), None);
    }

    #[test]
    fn parses_dotted_mt_timestamps() {
        let parsed = parse_flexible_date("2024.01.05 12:30:45").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parses_iso_dates_to_midnight() {
        let parsed = parse_flexible_date("2024-01-01").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parses_slash_dates_with_minutes_only() {
        let parsed = parse_flexible_date("2024/02/29 08:15").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-02-29 08:15:00");
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_flexible_date("yesterday"), None);
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("2024.13.40 99:99:99"), None);
    }
}
