//! Tabular export of report rows to CSV, JSON and Excel.
//!
//! The exporter consumes the already-flattened row set from the report
//! formatter; it never touches the store, so rendering large ranges can run
//! without holding any database lock.

use crate::libs::report::{ExportRow, NoteRow};
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Flat row set handed over by the report formatter.
#[derive(Debug)]
pub enum TableRows {
    Attendance(Vec<ExportRow>),
    Notes(Vec<NoteRow>),
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Writes the rows, returning the path of the created file. Without an
    /// explicit output path the file lands in the current directory named
    /// after `filename_hint`.
    pub fn export(&self, rows: &TableRows, filename_hint: &str) -> Result<PathBuf> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", filename_hint, self.format.extension())));

        match self.format {
            ExportFormat::Csv => self.write_csv(rows, &path)?,
            ExportFormat::Json => self.write_json(rows, &path)?,
            ExportFormat::Excel => self.write_excel(rows, &path)?,
        }
        Ok(path)
    }

    fn write_csv(&self, rows: &TableRows, path: &PathBuf) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        match rows {
            TableRows::Attendance(rows) => {
                for row in rows {
                    writer.serialize(row)?;
                }
            }
            TableRows::Notes(rows) => {
                for row in rows {
                    writer.serialize(row)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, rows: &TableRows, path: &PathBuf) -> Result<()> {
        let json = match rows {
            TableRows::Attendance(rows) => serde_json::to_string_pretty(rows)?,
            TableRows::Notes(rows) => serde_json::to_string_pretty(rows)?,
        };
        fs::write(path, json)?;
        Ok(())
    }

    fn write_excel(&self, rows: &TableRows, path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        match rows {
            TableRows::Attendance(rows) => {
                for (col, header) in ["Location", "Start", "End", "Hours"].iter().enumerate() {
                    worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
                }
                for (i, row) in rows.iter().enumerate() {
                    let r = (i + 1) as u32;
                    worksheet.write_string(r, 0, &row.location)?;
                    worksheet.write_string(r, 1, &row.start)?;
                    worksheet.write_string(r, 2, &row.end)?;
                    worksheet.write_number(r, 3, row.hours)?;
                }
            }
            TableRows::Notes(rows) => {
                for (col, header) in ["Date", "Time", "Note"].iter().enumerate() {
                    worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
                }
                for (i, row) in rows.iter().enumerate() {
                    let r = (i + 1) as u32;
                    worksheet.write_string(r, 0, &row.date)?;
                    worksheet.write_string(r, 1, &row.time)?;
                    worksheet.write_string(r, 2, &row.note)?;
                }
            }
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}
