//! Per-file result assembly

use crate::aggregate::WeekBuckets;
use serde::Serialize;

/// Result of processing one input file.
///
/// Alerts are side-channel output through the sink; the report carries only
/// the computed values, plus the full per-week map for callers that want the
/// detail (the JSON formatter does, the human one does not).
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub input: String,
    pub balance: f64,
    pub skipped_rows: usize,
    pub per_week: WeekBuckets,
}

impl WeeklyReport {
    pub fn assemble(
        input: impl Into<String>,
        balance: f64,
        skipped_rows: usize,
        per_week: WeekBuckets,
    ) -> Self {
        Self {
            input: input.into(),
            balance,
            skipped_rows,
            per_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fold;
    use crate::extract::TimesheetEntry;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn test_report_serializes_with_date_keys() {
        let entry = TimesheetEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            hours: 12.0,
        };
        let report = WeeklyReport::assemble("demo.xls", -28.0, 1, fold([entry], Weekday::Mon));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"], "demo.xls");
        assert_eq!(json["balance"], -28.0);
        assert_eq!(json["skipped_rows"], 1);
        assert_eq!(json["per_week"]["2024-01-01"]["2024-01-03"], 12.0);
    }
}
