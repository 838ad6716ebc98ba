#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use hozur::libs::engine;
    use hozur::libs::export::{ExportFormat, Exporter, TableRows};
    use hozur::libs::report::{self, DateRange};
    use std::path::PathBuf;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // One data directory per test binary; distinct user ids keep the tests
    // apart. Re-pointing HOME per test would race parallel tests.
    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct ExportTestContext {
        dir: PathBuf,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext {
                dir: temp_dir.path().to_path_buf(),
            }
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 24, h, m, 0).unwrap()
    }

    fn attendance_rows(user: i64) -> TableRows {
        engine::check_in(user, "Warehouse", at(9, 0)).unwrap();
        engine::check_out(user, "Warehouse", at(17, 0)).unwrap();
        let range = DateRange {
            start: at(0, 0).date_naive(),
            end: at(0, 0).date_naive(),
        };
        let stats = engine::range_stats(user, &range, at(18, 0), &[]).unwrap();
        TableRows::Attendance(report::flat_rows(&stats))
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let rows = attendance_rows(501);
        let output_path = ctx.dir.join("attendance.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        let written = exporter.export(&rows, "hozur_attendance_2025-06-24").unwrap();

        assert_eq!(written, output_path);
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("location,start,end,hours"));
        assert!(content.contains("Warehouse"));
        assert!(content.contains("8.0"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let rows = attendance_rows(502);
        let output_path = ctx.dir.join("attendance.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone()))
            .export(&rows, "hozur_attendance_2025-06-24")
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["location"], "Warehouse");
        assert_eq!(parsed[0]["hours"], 8.0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let rows = attendance_rows(503);
        let output_path = ctx.dir.join("attendance.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone()))
            .export(&rows, "hozur_attendance_2025-06-24")
            .unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    /// Without an explicit output path the filename hint decides the name.
    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_filename_from_hint(ctx: &mut ExportTestContext) {
        let rows = attendance_rows(504);
        std::env::set_current_dir(&ctx.dir).unwrap();
        let written = Exporter::new(ExportFormat::Csv, None).export(&rows, "hozur_attendance_2025-06-24").unwrap();
        assert_eq!(written, std::path::PathBuf::from("hozur_attendance_2025-06-24.csv"));
        assert!(written.exists());
    }
}
