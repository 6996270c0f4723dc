//! Header scanning and row extraction

use crate::reader::CellValue;
use crate::sink::DiagnosticSink;
use chrono::{Datelike, NaiveDate};

/// Hours represented by a duration cell holding a whole day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Column indices resolved from a sheet's header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    pub date: usize,
    pub duration: usize,
}

/// One validated timesheet record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimesheetEntry {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Where a row came from, for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub input: &'a str,
    pub sheet_index: usize,
    pub row: usize,
}

impl std::fmt::Display for RowContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, sheet {}, row {}",
            self.input, self.sheet_index, self.row
        )
    }
}

/// Locate the date and duration columns in a header row.
///
/// Matches are exact and case-sensitive, against string cells only. Returns
/// `None` unless both columns are present; a duplicate header takes the
/// rightmost occurrence.
pub fn locate_columns(
    header: &[CellValue],
    date_name: &str,
    duration_name: &str,
) -> Option<HeaderColumns> {
    let mut date_index = None;
    let mut duration_index = None;

    for (index, cell) in header.iter().enumerate() {
        if let Some(text) = cell.as_text() {
            if text == duration_name {
                duration_index = Some(index);
            } else if text == date_name {
                date_index = Some(index);
            }
        }
    }

    match (date_index, duration_index) {
        (Some(date), Some(duration)) => Some(HeaderColumns { date, duration }),
        _ => None,
    }
}

/// Convert one data row into a validated entry, or reject it.
///
/// Every rejection is reported through the sink with enough context to find
/// the offending row; the caller counts rejections as skipped.
pub fn extract_entry(
    row: &[CellValue],
    columns: &HeaderColumns,
    min_year: Option<i32>,
    context: &RowContext<'_>,
    sink: &dyn DiagnosticSink,
) -> Option<TimesheetEntry> {
    let date_cell = row.get(columns.date).filter(|cell| !cell.is_empty());
    let duration_cell = row.get(columns.duration).filter(|cell| !cell.is_empty());

    let (Some(date_cell), Some(duration_cell)) = (date_cell, duration_cell) else {
        sink.info(&format!(
            "{context}: duration = {}, date = {}",
            presence(duration_cell),
            presence(date_cell),
        ));
        return None;
    };

    let Some(date) = date_cell.as_date() else {
        sink.info(&format!(
            "{context}: cell type of date column is {}",
            date_cell.type_name()
        ));
        return None;
    };

    if let Some(min_year) = min_year {
        if date.year() < min_year {
            sink.info(&format!(
                "{context}: date {date} is before year {min_year}"
            ));
            return None;
        }
    }

    let Some(raw) = duration_cell.as_number() else {
        sink.info(&format!(
            "{context}: cell type of duration column is {}",
            duration_cell.type_name()
        ));
        return None;
    };

    // Durations are stored as a fraction of a day
    let hours = raw * HOURS_PER_DAY;
    if hours < 0.0 {
        sink.info(&format!("{context}: negative duration {hours} hours"));
        return None;
    }

    Some(TimesheetEntry { date, hours })
}

fn presence(cell: Option<&CellValue>) -> &'static str {
    if cell.is_some() { "exists" } else { "missing" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context<'a>() -> RowContext<'a> {
        RowContext {
            input: "test.xls",
            sheet_index: 0,
            row: 1,
        }
    }

    fn header() -> Vec<CellValue> {
        vec![
            CellValue::Text("Date".to_string()),
            CellValue::Text("Project".to_string()),
            CellValue::Text("Duration".to_string()),
        ]
    }

    #[test]
    fn test_locate_columns() {
        let columns = locate_columns(&header(), "Date", "Duration").unwrap();
        assert_eq!(columns, HeaderColumns { date: 0, duration: 2 });
    }

    #[test]
    fn test_locate_columns_missing_or_mismatched() {
        assert!(locate_columns(&header(), "Date", "Hours").is_none());
        assert!(locate_columns(&header(), "date", "Duration").is_none());
        assert!(locate_columns(&[], "Date", "Duration").is_none());

        // Numeric cells never match a header name
        let numeric_header = vec![CellValue::number(1.0), CellValue::number(2.0)];
        assert!(locate_columns(&numeric_header, "Date", "Duration").is_none());
    }

    #[test]
    fn test_extract_valid_row() {
        let columns = HeaderColumns { date: 0, duration: 2 };
        let row = vec![
            CellValue::date(date(2024, 1, 3), 45294.0),
            CellValue::Text("irrelevant".to_string()),
            CellValue::number(0.5),
        ];
        let sink = MemorySink::new();

        let entry = extract_entry(&row, &columns, None, &context(), &sink).unwrap();
        assert_eq!(entry.date, date(2024, 1, 3));
        assert_eq!(entry.hours, 12.0);
        assert!(sink.into_messages().is_empty());
    }

    #[test]
    fn test_extract_accepts_time_formatted_duration() {
        // A "0:30"-style cell arrives as a date-typed numeric whose raw
        // serial is the day fraction
        let columns = HeaderColumns { date: 0, duration: 1 };
        let row = vec![
            CellValue::date(date(2024, 1, 3), 45294.0),
            CellValue::date(date(1899, 12, 31), 0.25),
        ];
        let sink = MemorySink::new();

        let entry = extract_entry(&row, &columns, None, &context(), &sink).unwrap();
        assert_eq!(entry.hours, 6.0);
    }

    #[test]
    fn test_extract_rejects_missing_cells() {
        let columns = HeaderColumns { date: 0, duration: 2 };
        let sink = MemorySink::new();

        // Row shorter than the duration index
        let short_row = vec![CellValue::date(date(2024, 1, 3), 0.0)];
        assert!(extract_entry(&short_row, &columns, None, &context(), &sink).is_none());

        // Empty cell at the date index
        let empty_date = vec![
            CellValue::Empty,
            CellValue::Empty,
            CellValue::number(0.5),
        ];
        assert!(extract_entry(&empty_date, &columns, None, &context(), &sink).is_none());

        let messages = sink.into_messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].text.contains("duration = missing"));
        assert!(messages[1].text.contains("date = missing"));
    }

    #[test]
    fn test_extract_rejects_wrong_types() {
        let columns = HeaderColumns { date: 0, duration: 1 };
        let sink = MemorySink::new();

        // Text in the date column
        let text_date = vec![
            CellValue::Text("2024-01-03".to_string()),
            CellValue::number(0.5),
        ];
        assert!(extract_entry(&text_date, &columns, None, &context(), &sink).is_none());

        // Plain number in the date column is not a decoder-recognized date
        let numeric_date = vec![CellValue::number(45294.0), CellValue::number(0.5)];
        assert!(extract_entry(&numeric_date, &columns, None, &context(), &sink).is_none());

        // Text in the duration column
        let text_duration = vec![
            CellValue::date(date(2024, 1, 3), 0.0),
            CellValue::Text("half a day".to_string()),
        ];
        assert!(extract_entry(&text_duration, &columns, None, &context(), &sink).is_none());

        let messages = sink.into_messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].text.contains("date column is text"));
        assert!(messages[1].text.contains("date column is number"));
        assert!(messages[2].text.contains("duration column is text"));
    }

    #[test]
    fn test_extract_min_year_filter() {
        let columns = HeaderColumns { date: 0, duration: 1 };
        let row = vec![
            CellValue::date(date(1904, 1, 5), 1.0),
            CellValue::number(0.5),
        ];
        let sink = MemorySink::new();

        assert!(extract_entry(&row, &columns, Some(1990), &context(), &sink).is_none());
        // Disabled filter lets the same row through
        assert!(extract_entry(&row, &columns, None, &context(), &sink).is_some());

        let messages = sink.into_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].text.contains("before year 1990"));
    }

    #[test]
    fn test_extract_rejects_negative_duration() {
        let columns = HeaderColumns { date: 0, duration: 1 };
        let row = vec![
            CellValue::date(date(2024, 1, 3), 0.0),
            CellValue::number(-0.25),
        ];
        let sink = MemorySink::new();

        assert!(extract_entry(&row, &columns, None, &context(), &sink).is_none());
        assert!(sink.into_messages()[0].text.contains("negative duration"));
    }
}
