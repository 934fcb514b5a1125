/// Summary statistics over day buckets
use crate::calendar::DayBucket;
use crate::error::{RaincalError, Result};

/// Total, mean, and the wettest/driest days of an aggregated series.
///
/// Ties for wettest or driest go to the first occurrence in chronological
/// order. The mean divides by the number of days, rainy or not.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallSummary {
    pub total_mm: f64,
    pub mean_mm: f64,
    pub wettest: DayBucket,
    pub driest: DayBucket,
}

/// Summarize a non-empty sequence of day buckets.
pub fn summarize(days: &[DayBucket]) -> Result<RainfallSummary> {
    if days.is_empty() {
        return Err(RaincalError::EmptyInput);
    }
    let total_mm: f64 = days.iter().map(|d| d.total_mm).sum();
    let mean_mm = total_mm / days.len() as f64;

    let mut wettest = &days[0];
    let mut driest = &days[0];
    for day in &days[1..] {
        // strict comparisons keep the first occurrence on ties
        if day.total_mm > wettest.total_mm {
            wettest = day;
        }
        if day.total_mm < driest.total_mm {
            driest = day;
        }
    }

    Ok(RainfallSummary {
        total_mm,
        mean_mm,
        wettest: wettest.clone(),
        driest: driest.clone(),
    })
}
