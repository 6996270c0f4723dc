//! Workbook data structures

use chrono::NaiveDate;
use std::path::PathBuf;

/// Represents a decoded workbook
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Input identifier used in reports and diagnostics
    pub fn input_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Represents a worksheet as a dense grid of cells.
///
/// Row 0 of the used range is treated as the header row.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// The header row, if the sheet has any rows at all
    pub fn header_row(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header, with their absolute row index
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[CellValue])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, row)| (index, row.as_slice()))
    }
}

/// Cell value types as exposed by the decoder.
///
/// This is the whole vocabulary the engine accepts from the decoder: text,
/// numeric (which may carry a decoder-recognized calendar date), empty, or
/// something it has no use for. Booleans, error cells, and unparseable ISO
/// strings all collapse into `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Numeric {
        /// Raw value as stored in the cell (day fractions for durations)
        raw: f64,
        /// Calendar date, when the decoder recognized the cell as one
        date: Option<NaiveDate>,
    },
    Empty,
    Other,
}

impl CellValue {
    /// Numeric cell carrying a decoder-recognized date
    pub fn date(date: NaiveDate, raw: f64) -> Self {
        CellValue::Numeric {
            raw,
            date: Some(date),
        }
    }

    /// Plain numeric cell
    pub fn number(raw: f64) -> Self {
        CellValue::Numeric { raw, date: None }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text content, if this is a string cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Raw numeric value, if this is a numeric cell of any kind
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Numeric { raw, .. } => Some(*raw),
            _ => None,
        }
    }

    /// Calendar date, if the decoder recognized this cell as one
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Numeric { date, .. } => *date,
            _ => None,
        }
    }

    /// Short tag used in row-level diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Numeric { date: Some(_), .. } => "date",
            CellValue::Numeric { date: None, .. } => "number",
            CellValue::Empty => "empty",
            CellValue::Other => "other",
        }
    }
}
