//! Forecast aggregation: 3-hour forecast slots in, at most five daily
//! summary cards out.

use chrono::{Datelike, Local, TimeZone};

use crate::icon::{self, Icon};
use crate::model::ForecastEntry;

/// How many daily cards the widget renders.
const MAX_DAYS: usize = 5;

/// One rendered forecast card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    /// Short weekday label, e.g. "Mon".
    pub day: String,
    /// Rounded daily minimum.
    pub min: i64,
    /// Rounded daily maximum.
    pub max: i64,
    pub icon: Icon,
}

#[derive(Debug)]
struct DayBucket {
    label: String,
    temperatures: Vec<f64>,
    categories: Vec<String>,
}

/// Summarize forecast entries by calendar day in the viewer's local zone.
pub fn summarize(entries: &[ForecastEntry]) -> Vec<DailySummary> {
    summarize_in(entries, &Local)
}

/// Timezone-generic form of [`summarize`]; daily buckets are keyed by the
/// entry's weekday in `tz`.
///
/// All entries are bucketed first and the bucket list is truncated to the
/// first [`MAX_DAYS`] labels afterwards, so days beyond the fifth are
/// dropped whole even when their entries sit between kept ones in the
/// input. Entries whose timestamp does not resolve in `tz` are skipped.
pub fn summarize_in<Tz: TimeZone>(entries: &[ForecastEntry], tz: &Tz) -> Vec<DailySummary> {
    let mut buckets: Vec<DayBucket> = Vec::new();

    for entry in entries {
        let Some(moment) = tz.timestamp_opt(entry.timestamp, 0).single() else {
            continue;
        };
        let label = moment.weekday().to_string();

        let idx = buckets.iter().position(|b| b.label == label).unwrap_or_else(|| {
            buckets.push(DayBucket {
                label,
                temperatures: Vec::new(),
                categories: Vec::new(),
            });
            buckets.len() - 1
        });

        buckets[idx].temperatures.push(entry.temperature);
        buckets[idx].categories.push(entry.category.to_lowercase());
    }

    buckets.truncate(MAX_DAYS);
    buckets.iter().map(summarize_bucket).collect()
}

fn summarize_bucket(bucket: &DayBucket) -> DailySummary {
    let min = bucket
        .temperatures
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max = bucket
        .temperatures
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    DailySummary {
        day: bucket.label.clone(),
        min: min.round() as i64,
        max: max.round() as i64,
        icon: icon::forecast_icon(representative_category(&bucket.categories)),
    }
}

/// Majority vote over the bucket's categories. Counts are accumulated in
/// first-occurrence order and a candidate only displaces the running best
/// with a strictly greater count, so ties keep the earlier category.
fn representative_category(categories: &[String]) -> &str {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for category in categories {
        match counts.iter_mut().find(|(c, _)| c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut best = &counts[0];
    for candidate in &counts[1..] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }

    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    /// Seconds since epoch for the given UTC day/hour. Base date
    /// 2025-03-03 is a Monday.
    fn ts(day: u32, hour: u32) -> i64 {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0)
            .single()
            .expect("valid test timestamp")
            .timestamp()
    }

    fn entry(timestamp: i64, temperature: f64, category: &str) -> ForecastEntry {
        ForecastEntry {
            timestamp,
            temperature,
            category: category.to_string(),
        }
    }

    #[test]
    fn buckets_by_weekday_with_min_max_bounds() {
        // Five days, three slots each, integral temperatures.
        let mut entries = Vec::new();
        for day in 3..8 {
            for (i, hour) in [6, 12, 18].iter().enumerate() {
                entries.push(entry(ts(day, *hour), 50.0 + day as f64 + i as f64, "clear"));
            }
        }

        let summaries = summarize_in(&entries, &Utc);

        assert_eq!(summaries.len(), 5);
        assert_eq!(
            summaries.iter().map(|s| s.day.as_str()).collect::<Vec<_>>(),
            ["Mon", "Tue", "Wed", "Thu", "Fri"]
        );
        for (day, summary) in (3..8).zip(&summaries) {
            let temps: Vec<f64> = (0..3).map(|i| 50.0 + day as f64 + i as f64).collect();
            for t in &temps {
                assert!(summary.min as f64 <= *t && *t <= summary.max as f64);
            }
            assert_eq!(summary.min, 50 + day as i64);
            assert_eq!(summary.max, 52 + day as i64);
        }
    }

    #[test]
    fn monday_scenario() {
        let entries = [
            entry(ts(3, 6), 60.0, "Rain"),
            entry(ts(3, 12), 55.0, "Rain"),
            entry(ts(3, 18), 58.0, "Clear"),
        ];

        let summaries = summarize_in(&entries, &Utc);

        assert_eq!(summaries.len(), 1);
        let monday = &summaries[0];
        assert_eq!(monday.day, "Mon");
        assert_eq!(monday.min, 55);
        assert_eq!(monday.max, 60);
        assert_eq!(monday.icon, Icon::Rain);
    }

    #[test]
    fn seven_days_truncate_to_first_five() {
        let entries: Vec<ForecastEntry> =
            (3..10).map(|day| entry(ts(day, 12), 60.0, "clear")).collect();

        let summaries = summarize_in(&entries, &Utc);

        assert_eq!(
            summaries.iter().map(|s| s.day.as_str()).collect::<Vec<_>>(),
            ["Mon", "Tue", "Wed", "Thu", "Fri"]
        );
    }

    #[test]
    fn bucket_order_follows_first_seen_timestamp() {
        // Tuesday appears before Monday in the input.
        let entries = [
            entry(ts(4, 6), 61.0, "clear"),
            entry(ts(3, 6), 52.0, "clear"),
            entry(ts(4, 12), 63.0, "clear"),
        ];

        let summaries = summarize_in(&entries, &Utc);

        assert_eq!(
            summaries.iter().map(|s| s.day.as_str()).collect::<Vec<_>>(),
            ["Tue", "Mon"]
        );
        assert_eq!(summaries[0].min, 61);
        assert_eq!(summaries[0].max, 63);
    }

    #[test]
    fn representative_icon_majority_wins() {
        let entries = [
            entry(ts(3, 0), 60.0, "clear"),
            entry(ts(3, 3), 60.0, "rain"),
            entry(ts(3, 6), 60.0, "rain"),
        ];

        let summaries = summarize_in(&entries, &Utc);
        assert_eq!(summaries[0].icon, Icon::Rain);
    }

    #[test]
    fn representative_icon_tie_keeps_first_encountered() {
        // Two of each; "snow" was seen first and a tie must not displace it.
        let entries = [
            entry(ts(3, 0), 60.0, "snow"),
            entry(ts(3, 3), 60.0, "rain"),
            entry(ts(3, 6), 60.0, "snow"),
            entry(ts(3, 9), 60.0, "rain"),
        ];

        let summaries = summarize_in(&entries, &Utc);
        assert_eq!(summaries[0].icon, Icon::Snow);
    }

    #[test]
    fn categories_are_counted_case_insensitively() {
        let entries = [
            entry(ts(3, 0), 60.0, "Rain"),
            entry(ts(3, 3), 60.0, "rain"),
            entry(ts(3, 6), 60.0, "Clear"),
        ];

        let summaries = summarize_in(&entries, &Utc);
        assert_eq!(summaries[0].icon, Icon::Rain);
    }

    #[test]
    fn rounded_min_max() {
        let entries = [
            entry(ts(3, 0), 54.4, "clear"),
            entry(ts(3, 3), 60.6, "clear"),
        ];

        let summaries = summarize_in(&entries, &Utc);
        assert_eq!(summaries[0].min, 54);
        assert_eq!(summaries[0].max, 61);
    }

    #[test]
    fn empty_input_renders_no_cards() {
        assert!(summarize_in(&[], &Utc).is_empty());
    }
}
