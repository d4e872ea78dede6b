use chrono::{DateTime, Duration, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// `m:ss`, or `h:mm:ss` past the hour. Negative spans clamp to zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let total = value.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::time::fixed_now;

    #[test]
    fn elapsed_formats() {
        assert_eq!(format_elapsed(Duration::seconds(5)), "0:05");
        assert_eq!(format_elapsed(Duration::seconds(754)), "12:34");
        assert_eq!(format_elapsed(Duration::seconds(3_725)), "1:02:05");
        assert_eq!(format_elapsed(Duration::seconds(-9)), "0:00");
    }

    #[test]
    fn datetime_is_minute_precision() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13");
    }
}
