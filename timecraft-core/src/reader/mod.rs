//! Excel/ODS file reader using calamine

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

/// Read a workbook from a file path.
///
/// Decode failures are fatal for this file; the handle is released on every
/// exit path.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::new();

    for sheet_name in &sheet_names {
        // A sheet whose range cannot be read contributes no rows; row-level
        // problems are handled later, during extraction.
        let range = excel.worksheet_range(sheet_name).ok();
        sheets.push(parse_sheet(sheet_name, range.as_ref()));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

fn parse_sheet(name: &str, range: Option<&Range<Data>>) -> Sheet {
    let rows = match range {
        Some(range) => range
            .rows()
            .map(|row| row.iter().map(parse_cell_value).collect())
            .collect(),
        None => Vec::new(),
    };

    Sheet {
        name: name.to_string(),
        rows,
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::number(*i as f64),
        Data::Float(f) => CellValue::number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            // The decoder recognized a date or time format; keep the raw
            // serial so day-fraction durations survive the conversion.
            Some(datetime) => CellValue::date(datetime.date(), dt.as_f64()),
            None => CellValue::number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_date(s),
        Data::Bool(_) | Data::Error(_) | Data::DurationIso(_) => CellValue::Other,
        Data::Empty => CellValue::Empty,
    }
}

/// ODS and strict-ISO files expose dates as strings rather than serials
fn parse_iso_date(s: &str) -> CellValue {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        CellValue::date(datetime.date(), 0.0)
    } else if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        CellValue::date(date, 0.0)
    } else {
        CellValue::Other
    }
}
