#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use hozur::libs::notes;
    use hozur::libs::report::DateRange;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // One data directory per test binary; distinct user ids keep the tests
    // apart. Re-pointing HOME per test would race parallel tests.
    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct NotesTestContext {}

    impl TestContext for NotesTestContext {
        fn setup() -> Self {
            let temp_dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            NotesTestContext {}
        }
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, d, h, m, 0).unwrap()
    }

    fn range(from_day: u32, to_day: u32) -> DateRange {
        DateRange {
            start: at(from_day, 0, 0).date_naive(),
            end: at(to_day, 0, 0).date_naive(),
        }
    }

    /// Free text with recording mode off creates nothing.
    #[test_context(NotesTestContext)]
    #[test]
    fn test_not_recording(_ctx: &mut NotesTestContext) {
        assert!(!notes::is_recording(301).unwrap());
        assert!(notes::record_if_active(301, "busy day", at(24, 10, 0)).unwrap().is_none());
        assert!(notes::notes_in_range(301, &range(24, 24)).unwrap().is_empty());
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_record_while_active(_ctx: &mut NotesTestContext) {
        notes::start_recording(302).unwrap();
        assert!(notes::is_recording(302).unwrap());

        let note = notes::record_if_active(302, "warehouse was crowded", at(24, 10, 15)).unwrap().unwrap();
        assert_eq!(note.date, at(24, 0, 0).date_naive());
        assert_eq!(note.time, "10:15:00");
        assert_eq!(note.text, "warehouse was crowded");

        notes::end_recording(302).unwrap();
        assert!(notes::record_if_active(302, "after hours", at(24, 11, 0)).unwrap().is_none());

        let grouped = notes::notes_in_range(302, &range(24, 24)).unwrap();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].1.len(), 1);
    }

    /// Notes group by day in ascending order, (time, insertion order)
    /// inside a day.
    #[test_context(NotesTestContext)]
    #[test]
    fn test_grouping_and_ordering(_ctx: &mut NotesTestContext) {
        notes::start_recording(303).unwrap();
        notes::record_if_active(303, "second day", at(25, 9, 0)).unwrap();
        notes::record_if_active(303, "morning", at(24, 8, 0)).unwrap();
        notes::record_if_active(303, "evening", at(24, 18, 0)).unwrap();

        let grouped = notes::notes_in_range(303, &range(24, 25)).unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, at(24, 0, 0).date_naive());
        let first_day: Vec<&str> = grouped[0].1.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(first_day, vec!["morning", "evening"]);
        assert_eq!(grouped[1].1[0].text, "second day");

        // Range filtering is inclusive on both ends
        let only_25 = notes::notes_in_range(303, &range(25, 25)).unwrap();
        assert_eq!(only_25.len(), 1);
        assert_eq!(only_25[0].1[0].text, "second day");
    }

    /// Restart forces recording off regardless of prior state.
    #[test_context(NotesTestContext)]
    #[test]
    fn test_restart_resets_recording(_ctx: &mut NotesTestContext) {
        notes::start_recording(304).unwrap();
        notes::restart(304).unwrap();
        assert!(!notes::is_recording(304).unwrap());

        // Idempotent on an already inactive user
        notes::restart(304).unwrap();
        assert!(!notes::is_recording(304).unwrap());
    }
}
