use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Timestamp layouts without an offset; they are read as local time.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses an entry timestamp as sent by the backend.
///
/// Accepts, in order:
/// - RFC 3339 with an offset (`2024-03-01T10:00:00.000Z`), converted to local time.
/// - RFC 2822 (`Fri, 01 Mar 2024 10:00:00 +0000`).
/// - An ISO date-time without offset, read as local time.
/// - A plain `YYYY-MM-DD` date, read as local midnight.
///
/// Returns `None` when nothing matches.
pub fn parse_entry_date(input: &str) -> Option<DateTime<Local>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Local));
    }
    if let Ok(d) = DateTime::parse_from_rfc2822(s) {
        return Some(d.with_timezone(&Local));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return local_from_naive(naive);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| local_from_naive(date.and_time(NaiveTime::MIN)))
}

/// Resolves a wall-clock time in the local zone.
/// Ambiguous times take the earlier instant; times skipped by a DST jump move
/// forward one hour.
fn local_from_naive(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + chrono::Duration::hours(1)))
                .earliest()
        })
}

/// Calendar bucket of a date: `(year, month)`.
pub fn month_key(date: &DateTime<Local>) -> (i32, u32) {
    (date.year(), date.month())
}

/// Returns the group label of a date, e.g. `March 2024`.
pub fn month_label(date: &DateTime<Local>) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn plain_date_is_local_midnight() {
        let d = parse_entry_date("2024-03-01").unwrap();
        assert_eq!(d.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(d.hour(), 0);
    }

    #[test]
    fn naive_datetime_keeps_wall_clock() {
        let d = parse_entry_date("2024-03-15T18:30:00").unwrap();
        assert_eq!(d.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!((d.hour(), d.minute()), (18, 30));

        let with_fraction = parse_entry_date("2024-03-15 18:30:00.250").unwrap();
        assert_eq!(with_fraction.minute(), 30);
    }

    #[test]
    fn rfc3339_is_converted_to_local() {
        let d = parse_entry_date("2024-03-15T12:00:00.000Z").unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z").unwrap();
        assert_eq!(d, expected.with_timezone(&Local));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_entry_date("").is_none());
        assert!(parse_entry_date("yesterday").is_none());
        assert!(parse_entry_date("2024-13-01").is_none());
    }

    #[test]
    fn label_uses_long_month_name() {
        let d = parse_entry_date("2024-03-15").unwrap();
        assert_eq!(month_label(&d), "March 2024");
        assert_eq!(month_key(&d), (2024, 3));
    }
}
