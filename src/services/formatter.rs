//! Presentation projections for timestamps
//!
//! en-US shapes matching the rendered page: "9:00 AM", "May 1, 2024".
//! Absent input always maps to an empty string.

use chrono::{DateTime, FixedOffset, Utc};

/// "9:00 AM" in the given offset; empty for no timestamp
pub fn format_time(timestamp: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&offset).format("%-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// "May 1, 2024" in the given offset; empty for no timestamp
pub fn format_date(timestamp: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&offset).format("%B %-d, %Y").to_string(),
        None => String::new(),
    }
}

/// "May 1, 2024 - May 3, 2024", collapsing to a single date when the ends
/// format identically or the end is absent
pub fn format_date_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    offset: FixedOffset,
) -> String {
    let start_label = format_date(start, offset);
    let end_label = format_date(end, offset);

    if end_label.is_empty() || end_label == start_label {
        start_label
    } else {
        format!("{} - {}", start_label, end_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_format_time_morning() {
        assert_eq!(format_time(Some(at(2024, 5, 1, 9, 0)), utc()), "9:00 AM");
    }

    #[test]
    fn test_format_time_afternoon() {
        assert_eq!(format_time(Some(at(2024, 5, 1, 15, 5)), utc()), "3:05 PM");
    }

    #[test]
    fn test_format_time_applies_offset() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_time(Some(at(2024, 5, 1, 9, 0)), plus_two), "11:00 AM");
    }

    #[test]
    fn test_format_time_none_is_empty() {
        assert_eq!(format_time(None, utc()), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(at(2024, 5, 1, 9, 0)), utc()), "May 1, 2024");
    }

    #[test]
    fn test_format_date_none_is_empty() {
        assert_eq!(format_date(None, utc()), "");
    }

    #[test]
    fn test_format_date_range_spans_days() {
        let range = format_date_range(
            Some(at(2024, 5, 1, 8, 0)),
            Some(at(2024, 5, 3, 18, 0)),
            utc(),
        );
        assert_eq!(range, "May 1, 2024 - May 3, 2024");
    }

    #[test]
    fn test_format_date_range_collapses_same_day() {
        let range = format_date_range(
            Some(at(2024, 5, 1, 8, 0)),
            Some(at(2024, 5, 1, 18, 0)),
            utc(),
        );
        assert_eq!(range, "May 1, 2024");
    }

    #[test]
    fn test_format_date_range_missing_end() {
        let range = format_date_range(Some(at(2024, 5, 1, 8, 0)), None, utc());
        assert_eq!(range, "May 1, 2024");
    }
}
