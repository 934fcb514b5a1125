/// Day/week bucketing of hourly precipitation series
use crate::error::{RaincalError, Result};
use crate::sample::HourlySample;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of day buckets grouped into one calendar row.
///
/// Grouping is positional (the first seven distinct dates form week 1),
/// not aligned to Monday-start calendar weeks.
pub const DAYS_PER_WEEK: usize = 7;

/// All hourly samples for one calendar date, with their precomputed total.
///
/// Samples keep the order they arrived in; `total_mm` is derived at
/// construction and never stored independently of the samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub samples: Vec<HourlySample>,
    pub total_mm: f64,
}

impl DayBucket {
    fn new(date: NaiveDate) -> Self {
        DayBucket {
            date,
            samples: Vec::new(),
            total_mm: 0.0,
        }
    }

    fn push(&mut self, sample: HourlySample) {
        self.total_mm += sample.precipitation_mm;
        self.samples.push(sample);
    }
}

/// A positional run of up to seven day buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// 1-based position of this week in the calendar
    pub index: usize,
    pub days: Vec<DayBucket>,
    pub total_mm: f64,
}

/// The single piece of UI state: which of the two render modes the caller
/// wants. Owned entirely by the presentation layer and passed in here as a
/// plain parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    DayDetail(NaiveDate),
}

/// Structured output for one render: either the full calendar of weeks or
/// the hourly breakdown of the selected day.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Calendar(Vec<WeekBucket>),
    DayDetail(Vec<HourlySample>),
}

/// Partition samples into day buckets by calendar date.
///
/// Dates appear in first-seen order and samples retain their original order
/// within each bucket, so re-running on the same input yields an identical
/// result. An empty series is an error: callers must surface a missing
/// forecast rather than render a silently empty calendar.
pub fn bucket_by_day(samples: &[HourlySample]) -> Result<Vec<DayBucket>> {
    if samples.is_empty() {
        return Err(RaincalError::EmptyInput);
    }
    let mut buckets: Vec<DayBucket> = Vec::new();
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();
    for sample in samples {
        let date = sample.date();
        let idx = *index_by_date.entry(date).or_insert_with(|| {
            buckets.push(DayBucket::new(date));
            buckets.len() - 1
        });
        buckets[idx].push(sample.clone());
    }
    Ok(buckets)
}

/// Group day buckets into consecutive weeks of seven, in order.
///
/// A trailing remainder forms a shorter final week: 14 days give two full
/// weeks, 15 days give two full weeks plus a week of one day.
pub fn bucket_by_week(days: Vec<DayBucket>) -> Vec<WeekBucket> {
    let chunks = days.into_iter().chunks(DAYS_PER_WEEK);
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let days: Vec<DayBucket> = chunk.collect();
            let total_mm = days.iter().map(|d| d.total_mm).sum();
            WeekBucket {
                index: i + 1,
                days,
                total_mm,
            }
        })
        .collect()
}

/// All samples falling on `day`, in chronological order.
///
/// A day with no samples yields an empty list, not an error; the caller
/// selected it, so it renders as an empty breakdown.
pub fn hourly_breakdown(samples: &[HourlySample], day: NaiveDate) -> Vec<HourlySample> {
    let mut hours: Vec<HourlySample> = samples
        .iter()
        .filter(|s| s.date() == day)
        .cloned()
        .collect();
    hours.sort_by_key(|s| s.timestamp);
    hours
}

/// Evaluate one render of the dashboard: calendar weeks, or the hourly
/// breakdown when a day is selected.
pub fn build_view(samples: &[HourlySample], mode: ViewMode) -> Result<View> {
    match mode {
        ViewMode::Calendar => {
            let days = bucket_by_day(samples)?;
            Ok(View::Calendar(bucket_by_week(days)))
        }
        ViewMode::DayDetail(day) => Ok(View::DayDetail(hourly_breakdown(samples, day))),
    }
}
