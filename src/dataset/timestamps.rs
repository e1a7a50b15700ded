//! Parsing of the textual `time` column into naive datetimes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a single timestamp cell.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS[.f]]` (also with `T` or `/` separators), a plain
/// date (taken as midnight) or an RFC 3339 string. The offset of an RFC 3339
/// string is dropped: hour, month and year stay on the local wall clock.
/// Returns `None` when no format matches.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_space_separated_datetime() {
        let parsed = parse_timestamp("2015-03-01 08:00:00").unwrap();
        assert_eq!(parsed.year(), 2015);
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.hour(), 8);
    }

    #[test]
    fn test_parse_variants() {
        let expected = NaiveDate::from_ymd_opt(2015, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        for raw in [
            "2015-03-01 08:30",
            "2015-03-01T08:30:00",
            "2015/03/01 08:30:00",
            "2015-03-01 08:30:00.000",
            " 2015-03-01 08:30:00 ",
            "2015-03-01T08:30:00+01:00",
            "2015-03-01T08:30:00Z",
        ] {
            assert_eq!(parse_timestamp(raw), Some(expected), "failed for '{}'", raw);
        }
    }

    #[test]
    fn test_offset_does_not_move_across_year_boundary() {
        let parsed = parse_timestamp("2016-12-31T23:30:00-05:00").unwrap();
        assert_eq!(parsed.year(), 2016);
        assert_eq!(parsed.month(), 12);
        assert_eq!(parsed.hour(), 23);

        let parsed = parse_timestamp("2017-01-01T00:15:00+08:00").unwrap();
        assert_eq!(parsed.year(), 2017);
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_parse_plain_date_is_midnight() {
        let parsed = parse_timestamp("2016-12-31").unwrap();
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.day(), 31);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2015-13-01 00:00:00"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
