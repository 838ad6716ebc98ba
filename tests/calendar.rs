#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use hozur::libs::calendar;
    use hozur::libs::error::HozurError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Known Nowruz anchors and a mid-year date.
    #[test]
    fn test_known_conversions() {
        assert_eq!(calendar::format_display(date(2024, 3, 20)), "1403-01-01");
        assert_eq!(calendar::format_display(date(2025, 3, 21)), "1404-01-01");
        assert_eq!(calendar::format_display(date(2000, 3, 20)), "1379-01-01");
        assert_eq!(calendar::format_display(date(2026, 8, 29)), "1405-06-07");
    }

    #[test]
    fn test_parse_known_literals() {
        assert_eq!(calendar::parse_display("1403-01-01").unwrap(), date(2024, 3, 20));
        assert_eq!(calendar::parse_display("1404-01-01").unwrap(), date(2025, 3, 21));
        assert_eq!(calendar::parse_display("1405-06-07").unwrap(), date(2026, 8, 29));
    }

    /// parse(format(d)) == d across several years, including leap ones.
    #[test]
    fn test_round_trip() {
        let mut day = date(2019, 1, 1);
        let end = date(2027, 1, 1);
        while day < end {
            let literal = calendar::format_display(day);
            assert_eq!(calendar::parse_display(&literal).unwrap(), day, "round trip failed for {}", day);
            day = day + Duration::days(13);
        }
    }

    #[test]
    fn test_leap_years() {
        // 1399 and 1403 are leap; their neighbors are not
        assert!(calendar::is_leap_year(1399));
        assert!(calendar::is_leap_year(1403));
        assert!(!calendar::is_leap_year(1402));
        assert!(!calendar::is_leap_year(1404));

        assert_eq!(calendar::month_length(1403, 12), 30);
        assert_eq!(calendar::month_length(1404, 12), 29);
        assert_eq!(calendar::month_length(1404, 1), 31);
        assert_eq!(calendar::month_length(1404, 7), 30);
    }

    #[test]
    fn test_last_day_of_leap_year() {
        // 30 Esfand 1403 is the day before Nowruz 1404
        assert_eq!(calendar::parse_display("1403-12-30").unwrap(), date(2025, 3, 20));
    }

    #[test]
    fn test_invalid_literals() {
        for literal in ["", "hello", "1403/01/01", "1403-01", "1403-13-01", "1403-00-05", "1403-01-32", "1404-12-30", "14o3-01-01"] {
            match calendar::parse_display(literal) {
                Err(HozurError::InvalidDateFormat(s)) => assert_eq!(s, literal),
                other => panic!("expected InvalidDateFormat for {:?}, got {:?}", literal, other),
            }
        }
    }
}
