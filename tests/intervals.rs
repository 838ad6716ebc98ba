#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use hozur::db::intervals::{Intervals, OpenAttempt};
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // One data directory per test binary; distinct user ids keep the tests
    // apart. Re-pointing HOME per test would race parallel tests.
    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct IntervalsTestContext {}

    impl TestContext for IntervalsTestContext {
        /// Redirects database storage into a temporary directory.
        fn setup() -> Self {
            let temp_dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            IntervalsTestContext {}
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 24, h, m, 0).unwrap()
    }

    /// At most one open interval may exist per (user, location).
    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_single_open_interval_invariant(_ctx: &mut IntervalsTestContext) {
        let intervals = Intervals::new().unwrap();

        let first = intervals.insert_open_checked(101, "Warehouse", at(9, 0)).unwrap();
        assert!(matches!(first, OpenAttempt::Opened(_)));

        // Second open attempt must not write anything
        match intervals.insert_open_checked(101, "Warehouse", at(10, 0)).unwrap() {
            OpenAttempt::Conflict(existing) => assert_eq!(existing.start, at(9, 0)),
            OpenAttempt::Opened(_) => panic!("conflicting open interval was inserted"),
        }

        let day = intervals.fetch_range(101, at(0, 0), at(23, 59)).unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day.iter().filter(|i| i.end.is_none()).count(), 1);
    }

    /// Same user, different location: both may be open at once.
    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_open_per_location(_ctx: &mut IntervalsTestContext) {
        let intervals = Intervals::new().unwrap();

        assert!(matches!(intervals.insert_open_checked(102, "Warehouse", at(9, 0)).unwrap(), OpenAttempt::Opened(_)));
        assert!(matches!(intervals.insert_open_checked(102, "Office", at(9, 30)).unwrap(), OpenAttempt::Opened(_)));

        assert!(intervals.find_open(102, "Warehouse").unwrap().is_some());
        assert!(intervals.find_open(102, "Office").unwrap().is_some());
        assert!(intervals.find_open(102, "Garage").unwrap().is_none());
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_close_latest_open(_ctx: &mut IntervalsTestContext) {
        let intervals = Intervals::new().unwrap();

        intervals.insert_open_checked(103, "Office", at(9, 0)).unwrap();
        let closed = intervals.close_latest_open(103, "Office", at(17, 0), false).unwrap().unwrap();
        assert_eq!(closed.end, Some(at(17, 0)));
        assert!(!closed.auto_closed);

        // Nothing left open; a second close is a no-op
        assert!(intervals.close_latest_open(103, "Office", at(18, 0), false).unwrap().is_none());
        assert!(intervals.find_open(103, "Office").unwrap().is_none());
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_insert_closed_auto(_ctx: &mut IntervalsTestContext) {
        let intervals = Intervals::new().unwrap();

        let auto = intervals.insert_closed(104, "Office", at(12, 0), at(12, 0), true).unwrap();
        assert_eq!(auto.start, auto.end.unwrap());
        assert!(auto.auto_closed);
        // An auto-closed record is closed, not open
        assert!(intervals.find_open(104, "Office").unwrap().is_none());
    }

    /// Range query returns intervals ordered by start; the upper bound is
    /// exclusive.
    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_fetch_range_ordering_and_bounds(_ctx: &mut IntervalsTestContext) {
        let intervals = Intervals::new().unwrap();

        intervals.insert_closed(105, "Office", at(13, 0), at(14, 0), false).unwrap();
        intervals.insert_closed(105, "Warehouse", at(9, 0), at(12, 0), false).unwrap();
        intervals.insert_closed(105, "Garage", at(15, 0), at(16, 0), false).unwrap();

        let fetched = intervals.fetch_range(105, at(9, 0), at(15, 0)).unwrap();
        let locations: Vec<&str> = fetched.iter().map(|i| i.location.as_str()).collect();
        // 15:00 start is excluded
        assert_eq!(locations, vec!["Warehouse", "Office"]);

        // Other users are invisible
        assert!(intervals.fetch_range(106, at(0, 0), at(23, 59)).unwrap().is_empty());
    }
}
