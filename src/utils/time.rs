use chrono::{DateTime, Utc};

/// Format a creation time relative to now (e.g. "just now", "5m", "2h", "3d")
pub fn format_relative_time(created_at: DateTime<Utc>) -> String {
    format_relative_time_at(created_at, Utc::now())
}

/// Format `created_at` relative to a given `now`
pub fn format_relative_time_at(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - created_at).num_seconds();

    match diff {
        i64::MIN..=59 => "just now".to_string(),
        60..=3599 => format!("{}m", diff / 60),
        3600..=86399 => format!("{}h", diff / 3600),
        86400..=604799 => format!("{}d", diff / 86400),
        // Older than 7 days shows the date
        _ => created_at.format("%b %d").to_string(),
    }
}

/// Format a creation time as a full date and time
pub fn format_datetime(created_at: DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();

        assert_eq!(format_relative_time_at(now, now), "just now");
        assert_eq!(format_relative_time_at(now + Duration::seconds(30), now), "just now");
        assert_eq!(format_relative_time_at(now - Duration::minutes(5), now), "5m");
        assert_eq!(format_relative_time_at(now - Duration::hours(2), now), "2h");
        assert_eq!(format_relative_time_at(now - Duration::days(3), now), "3d");
        assert_eq!(format_relative_time_at(now - Duration::days(10), now), "Mar 10");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 20, 8, 5, 9).unwrap();
        assert_eq!(format_datetime(dt), "2024-03-20 08:05:09");
    }
}
