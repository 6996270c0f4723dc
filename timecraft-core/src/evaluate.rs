//! Balance and alert evaluation over aggregated week buckets

use crate::aggregate::WeekBuckets;
use crate::config::CalcConfig;
use crate::sink::DiagnosticSink;
use crate::week::is_weekend;

/// Sanity ceiling for a single week's total
pub const MAX_HOURS_PER_WEEK: f64 = 24.0 * 7.0;

/// Walk the buckets in ascending week and day order, emit alerts, and return
/// the balance against the expected weekly quota.
///
/// Alerts and the balance are independent: a week can be over quota and
/// still trip the minimum-weekly alert level.
pub fn evaluate(buckets: &WeekBuckets, config: &CalcConfig, sink: &dyn DiagnosticSink) -> f64 {
    let mut balance = 0.0;

    for (week_start, days) in buckets {
        let total: f64 = days.values().sum();

        if total > MAX_HOURS_PER_WEEK {
            sink.warning(&format!(
                "week starting {week_start} has an unexpectedly large total of {} hours",
                format_hours(total, config.decimals)
            ));
        }

        let diff = total - config.expected_per_week;
        if diff < 0.0 {
            sink.info(&format!(
                "week starting {week_start} is {} hours under the expected amount",
                format_hours(-diff, config.decimals)
            ));
        }

        if total < config.min_weekly {
            sink.alert(&format!(
                "week starting {week_start}: {} hours is less than alert level {} ({} hours short)",
                format_hours(total, config.decimals),
                format_hours(config.min_weekly, config.decimals),
                format_hours(config.min_weekly - total, config.decimals),
            ));
        }

        for (day, hours) in days {
            // Weekends are exempt from the daily minimum
            if is_weekend(*day) {
                continue;
            }
            if *hours < config.min_daily {
                sink.alert(&format!(
                    "{day}: {} hours is less than alert level {} ({} hours short)",
                    format_hours(*hours, config.decimals),
                    format_hours(config.min_daily, config.decimals),
                    format_hours(config.min_daily - hours, config.decimals),
                ));
            }
        }

        balance += diff;
    }

    balance
}

/// Fixed-point rendering of an hour value; negative precision clamps to 0
pub fn format_hours(hours: f64, decimals: i64) -> String {
    let places = decimals.max(0) as usize;
    format!("{hours:.places$}")
}
