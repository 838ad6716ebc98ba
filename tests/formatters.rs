#[cfg(test)]
mod tests {
    use chrono::Duration;
    use hozur::libs::formatter::{format_duration, format_hhmm, format_hours};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::hours(8)), "8 hours 0 minutes");
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "1 hours 30 minutes");
        assert_eq!(format_duration(&Duration::minutes(45)), "0 hours 45 minutes");
        assert_eq!(format_duration(&Duration::zero()), "0 hours 0 minutes");
    }

    #[test]
    fn test_negative_duration_is_zero() {
        assert_eq!(format_duration(&Duration::minutes(-10)), "0 hours 0 minutes");
        assert_eq!(format_hhmm(&Duration::minutes(-10)), "00:00");
        assert_eq!(format_hours(&Duration::minutes(-10)), 0.0);
    }

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(&(Duration::hours(8) + Duration::minutes(5))), "08:05");
        assert_eq!(format_hhmm(&Duration::minutes(30)), "00:30");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(&Duration::minutes(90)), 1.5);
        assert_eq!(format_hours(&Duration::minutes(50)), 0.83);
        assert_eq!(format_hours(&Duration::hours(8)), 8.0);
    }
}
