use crate::libs::export::TableRows;
use crate::libs::report::{ExportRow, NoteRow};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn attendance(rows: &[ExportRow]) {
        let mut table = Table::new();

        table.add_row(row!["LOCATION", "START", "END", "HOURS"]);
        for export_row in rows {
            table.add_row(row![export_row.location, export_row.start, export_row.end, export_row.hours]);
        }
        table.printstd();
    }

    pub fn notes(rows: &[NoteRow]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME", "NOTE"]);
        for note_row in rows {
            table.add_row(row![note_row.date, note_row.time, note_row.note]);
        }
        table.printstd();
    }

    pub fn table(rows: &TableRows) {
        match rows {
            TableRows::Attendance(rows) => Self::attendance(rows),
            TableRows::Notes(rows) => Self::notes(rows),
        }
    }
}
