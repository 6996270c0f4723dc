//! timecraft-core: timesheet balance calculation over spreadsheet exports
//!
//! This library locates a date and a duration column by header name in each
//! sheet of a workbook, converts the rows into validated (date, hours)
//! entries, buckets them into weeks, and derives a balance against an
//! expected weekly quota together with threshold alerts.

pub mod aggregate;
pub mod config;
pub mod evaluate;
pub mod extract;
pub mod reader;
pub mod report;
pub mod sink;
pub mod week;

use anyhow::Result;
use std::path::Path;

pub use aggregate::{DayBucket, WeekBuckets};
pub use config::{CalcConfig, ConfigError, parse_weekday};
pub use evaluate::{MAX_HOURS_PER_WEEK, format_hours};
pub use extract::TimesheetEntry;
pub use reader::{CellValue, Sheet, Workbook};
pub use report::WeeklyReport;
pub use sink::{DiagnosticSink, Level, MemorySink, Message};

/// Main calculation interface
pub struct BalanceCalculator {
    config: CalcConfig,
}

impl BalanceCalculator {
    /// Create a calculator, rejecting invalid configuration up front
    pub fn new(config: CalcConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Decode a spreadsheet file and compute its report.
    ///
    /// Decode failures are fatal for this file only; they never affect other
    /// files processed by the same calculator.
    pub fn calculate_file<P: AsRef<Path>>(
        &self,
        path: P,
        sink: &dyn DiagnosticSink,
    ) -> Result<WeeklyReport> {
        let workbook = reader::read_workbook(path)?;
        Ok(self.calculate_workbook(&workbook, sink))
    }

    /// Compute the report for an already-decoded workbook.
    ///
    /// Each sheet's header row is scanned once; sheets without both columns
    /// are excluded. Rows that fail validation are counted as skipped and
    /// reported through the sink, never aborting the file.
    pub fn calculate_workbook(
        &self,
        workbook: &Workbook,
        sink: &dyn DiagnosticSink,
    ) -> WeeklyReport {
        let config = &self.config;
        let input = workbook.input_name();
        let mut buckets = WeekBuckets::new();
        let mut skipped_rows = 0;
        let mut found_any = false;

        for (sheet_index, sheet) in workbook.sheets.iter().enumerate() {
            let Some(header) = sheet.header_row() else {
                continue;
            };
            let Some(columns) =
                extract::locate_columns(header, &config.date_column, &config.duration_column)
            else {
                sink.info(&format!(
                    "{input}: sheet {sheet_index} ({}) has no matching header row, skipping",
                    sheet.name
                ));
                continue;
            };
            found_any = true;

            for (row_index, row) in sheet.data_rows() {
                let context = extract::RowContext {
                    input: &input,
                    sheet_index,
                    row: row_index,
                };
                match extract::extract_entry(row, &columns, config.min_year, &context, sink) {
                    Some(entry) => aggregate::add_entry(&mut buckets, entry, config.week_start),
                    None => skipped_rows += 1,
                }
            }
        }

        if !found_any {
            sink.warning(&format!(
                "did not find any columns named {:?}, {:?} in {input}",
                config.duration_column, config.date_column
            ));
        }

        let balance = evaluate::evaluate(&buckets, config, sink);
        WeeklyReport::assemble(input, balance, skipped_rows, buckets)
    }
}
