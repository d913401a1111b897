//! Coarse relative-time formatting for article ages.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
// Fixed-length approximations: not calendar-accurate.
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Largest applicable unit, floored. No pluralization, no "just now" case;
/// exactly one year reads "12 months ago" because the unit threshold is
/// strictly greater-than.
pub fn time_ago(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published).num_seconds();
    if seconds > YEAR {
        return format!("{} years ago", seconds / YEAR);
    }
    if seconds > MONTH {
        return format!("{} months ago", seconds / MONTH);
    }
    if seconds > DAY {
        return format!("{}d ago", seconds / DAY);
    }
    if seconds > HOUR {
        return format!("{}h ago", seconds / HOUR);
    }
    if seconds > MINUTE {
        return format!("{}min ago", seconds / MINUTE);
    }
    format!("{}s ago", seconds.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2024-05-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_ninety_days_is_three_months() {
        let published = now() - Duration::days(90);
        assert_eq!(time_ago(published, now()), "3 months ago");
    }

    #[test]
    fn test_forty_five_seconds() {
        let published = now() - Duration::seconds(45);
        assert_eq!(time_ago(published, now()), "45s ago");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(time_ago(now() - Duration::hours(5), now()), "5h ago");
        assert_eq!(time_ago(now() - Duration::days(2), now()), "2d ago");
        assert_eq!(time_ago(now() - Duration::minutes(45), now()), "45min ago");
        // 90 minutes is strictly more than an hour, so the hour unit wins.
        assert_eq!(time_ago(now() - Duration::minutes(90), now()), "1h ago");
    }

    #[test]
    fn test_years() {
        let published = now() - Duration::days(800);
        assert_eq!(time_ago(published, now()), "2 years ago");
    }

    #[test]
    fn test_exactly_one_year_reads_as_months() {
        // 365 days is not strictly more than a year, so the month unit wins.
        let published = now() - Duration::days(365);
        assert_eq!(time_ago(published, now()), "12 months ago");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let published = now() + Duration::seconds(30);
        assert_eq!(time_ago(published, now()), "0s ago");
    }
}
