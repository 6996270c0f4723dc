//! Week/day aggregation of timesheet entries

use crate::extract::TimesheetEntry;
use crate::week::week_start_of;
use chrono::{NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Accumulated hours per day
pub type DayBucket = BTreeMap<NaiveDate, f64>;

/// Day buckets grouped by week-start date.
///
/// Ordered keys give the evaluator its ascending week and day walk for free.
pub type WeekBuckets = BTreeMap<NaiveDate, DayBucket>;

/// Accumulate one entry into its week and day bucket.
///
/// The same date accumulates additively across rows and sheets.
pub fn add_entry(buckets: &mut WeekBuckets, entry: TimesheetEntry, week_starts_on: Weekday) {
    let week_start = week_start_of(entry.date, week_starts_on);
    let day_total = buckets
        .entry(week_start)
        .or_default()
        .entry(entry.date)
        .or_insert(0.0);
    *day_total += entry.hours;
}

/// Fold a sequence of entries into week buckets
pub fn fold<I>(entries: I, week_starts_on: Weekday) -> WeekBuckets
where
    I: IntoIterator<Item = TimesheetEntry>,
{
    let mut buckets = WeekBuckets::new();
    for entry in entries {
        add_entry(&mut buckets, entry, week_starts_on);
    }
    buckets
}
