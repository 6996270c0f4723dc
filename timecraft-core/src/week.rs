//! Week boundary resolution

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Date of the first day of the week containing `date`.
///
/// The result is always on `week_starts_on`, never after `date`, and at most
/// six days before it.
pub fn week_start_of(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let offset = date.weekday().days_since(week_starts_on);
    date - Duration::days(i64::from(offset))
}

/// Saturday or Sunday, independent of the configured week start
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_convention() {
        // 2024-01-03 is a Wednesday
        let wednesday = date(2024, 1, 3);
        assert_eq!(week_start_of(wednesday, Weekday::Mon), date(2024, 1, 1));

        // A Monday maps to itself
        let monday = date(2024, 1, 1);
        assert_eq!(week_start_of(monday, Weekday::Mon), monday);

        // A Sunday belongs to the week that started six days earlier
        let sunday = date(2024, 1, 7);
        assert_eq!(week_start_of(sunday, Weekday::Mon), date(2024, 1, 1));
    }

    #[test]
    fn test_sunday_convention() {
        let wednesday = date(2024, 1, 3);
        assert_eq!(week_start_of(wednesday, Weekday::Sun), date(2023, 12, 31));

        let sunday = date(2023, 12, 31);
        assert_eq!(week_start_of(sunday, Weekday::Sun), sunday);
    }

    #[test]
    fn test_week_start_is_idempotent_and_contains_date() {
        let start = date(2023, 11, 1);
        for offset in 0..60 {
            let d = start + Duration::days(offset);
            for convention in [Weekday::Mon, Weekday::Sun, Weekday::Wed] {
                let week_start = week_start_of(d, convention);
                assert_eq!(week_start_of(week_start, convention), week_start);
                assert!(week_start <= d);
                assert!(d - week_start < Duration::days(7));
            }
        }
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date(2024, 1, 6))); // Saturday
        assert!(is_weekend(date(2024, 1, 7))); // Sunday
        assert!(!is_weekend(date(2024, 1, 5))); // Friday
        assert!(!is_weekend(date(2024, 1, 8))); // Monday
    }
}
