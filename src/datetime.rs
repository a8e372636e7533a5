use chrono::{DateTime, Duration, Local, Utc};
use humantime::format_duration;

pub fn display_datetime(datetime: DateTime<Utc>) -> String {
    datetime.with_timezone(&Local).to_rfc3339()
}

pub fn display_date(datetime: DateTime<Utc>) -> String {
    datetime.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

pub fn display_clock(datetime: DateTime<Local>) -> String {
    datetime.format("%I:%M:%S %p").to_string()
}

/// Remaining time until `eta`, rounded down to the minute
pub fn display_countdown(now: DateTime<Utc>, eta: DateTime<Utc>) -> String {
    let (prefix, remaining) = if eta >= now {
        ("arrives in", eta - now)
    } else {
        ("overdue by", now - eta)
    };

    let remaining = Duration::minutes(remaining.num_minutes());

    match remaining.to_std() {
        Ok(remaining) if remaining.as_secs() > 0 => {
            format!("{prefix} {}", format_duration(remaining))
        }
        _ => "arriving now".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::display_countdown;

    #[test]
    fn countdown_before_eta() {
        let now = Utc.with_ymd_and_hms(2024, 1, 12, 11, 30, 0).unwrap();
        let eta = now + Duration::days(2) + Duration::hours(3) + Duration::seconds(42);

        assert_eq!(display_countdown(now, eta), "arrives in 2days 3h");
    }

    #[test]
    fn countdown_after_eta() {
        let eta = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        let now = eta + Duration::minutes(90);

        assert_eq!(display_countdown(now, eta), "overdue by 1h 30m");
    }

    #[test]
    fn countdown_within_a_minute() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();

        assert_eq!(display_countdown(now, now + Duration::seconds(20)), "arriving now");
    }
}
