/// Sample data structures and series validation for rainfall observations
use crate::error::{RaincalError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format used by the Open-Meteo hourly series (timezone-local)
pub const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Date format used by the Open-Meteo daily series
pub const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single hourly precipitation measurement.
///
/// Corresponds to one entry of the parallel `hourly.time` /
/// `hourly.precipitation` arrays in an Open-Meteo forecast response.
/// Values are validated at construction; a sample that exists is well formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    /// Precipitation in millimetres, finite and non-negative
    pub precipitation_mm: f64,
}

impl HourlySample {
    /// Build a sample, rejecting negative or non-finite precipitation.
    ///
    /// `index` identifies the offending entry in the source series so the
    /// error names exactly which value was bad.
    pub fn new(timestamp: NaiveDateTime, precipitation_mm: f64, index: usize) -> Result<Self> {
        validate_mm(precipitation_mm, index)?;
        Ok(HourlySample {
            timestamp,
            precipitation_mm,
        })
    }

    /// Calendar date this sample belongs to
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// One entry of the trailing historical daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySum {
    pub date: NaiveDate,
    /// Precipitation total for the day in millimetres
    pub precipitation_sum_mm: f64,
}

impl DailySum {
    pub fn new(date: NaiveDate, precipitation_sum_mm: f64, index: usize) -> Result<Self> {
        validate_mm(precipitation_sum_mm, index)?;
        Ok(DailySum {
            date,
            precipitation_sum_mm,
        })
    }
}

fn validate_mm(value: f64, index: usize) -> Result<()> {
    if !value.is_finite() {
        return Err(RaincalError::MalformedSample {
            index,
            reason: format!("precipitation value is not finite: {value}"),
        });
    }
    if value < 0.0 {
        return Err(RaincalError::MalformedSample {
            index,
            reason: format!("negative precipitation value: {value}"),
        });
    }
    Ok(())
}

/// Pair the parallel hourly time/precipitation arrays into validated samples.
///
/// Fails fast on the first malformed entry (unparsable timestamp, negative
/// or non-finite value) and on a length mismatch between the two arrays.
pub fn parse_hourly_series(times: &[String], values: &[f64]) -> Result<Vec<HourlySample>> {
    if times.len() != values.len() {
        return Err(RaincalError::MalformedSample {
            index: times.len().min(values.len()),
            reason: format!(
                "series length mismatch: {} timestamps, {} values",
                times.len(),
                values.len()
            ),
        });
    }
    times
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (time, &value))| {
            let timestamp = NaiveDateTime::parse_from_str(time, HOURLY_TIME_FORMAT).map_err(
                |e| RaincalError::MalformedSample {
                    index,
                    reason: format!("unparsable timestamp {time:?}: {e}"),
                },
            )?;
            HourlySample::new(timestamp, value, index)
        })
        .collect()
}

/// Pair the parallel daily time/precipitation_sum arrays into validated sums.
pub fn parse_daily_series(dates: &[String], sums: &[f64]) -> Result<Vec<DailySum>> {
    if dates.len() != sums.len() {
        return Err(RaincalError::MalformedSample {
            index: dates.len().min(sums.len()),
            reason: format!(
                "series length mismatch: {} dates, {} values",
                dates.len(),
                sums.len()
            ),
        });
    }
    dates
        .iter()
        .zip(sums)
        .enumerate()
        .map(|(index, (date, &sum))| {
            let date = NaiveDate::parse_from_str(date, DAILY_DATE_FORMAT).map_err(|e| {
                RaincalError::MalformedSample {
                    index,
                    reason: format!("unparsable date {date:?}: {e}"),
                }
            })?;
            DailySum::new(date, sum, index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RaincalError;

    #[test]
    fn test_parse_hourly_series() {
        let times = vec![
            "2024-07-01T00:00".to_string(),
            "2024-07-01T01:00".to_string(),
        ];
        let values = vec![0.0, 1.2];
        let samples = parse_hourly_series(&times, &values).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(
            samples[0].date(),
            chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
        assert_eq!(samples[1].precipitation_mm, 1.2);
    }

    #[test]
    fn test_negative_value_identifies_index() {
        let times = vec![
            "2024-07-01T00:00".to_string(),
            "2024-07-01T01:00".to_string(),
        ];
        let values = vec![0.0, -0.5];
        let err = parse_hourly_series(&times, &values).unwrap_err();
        match err {
            RaincalError::MalformedSample { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("-0.5"));
            }
            other => panic!("expected MalformedSample, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_timestamp() {
        let times = vec!["July 1st".to_string()];
        let values = vec![0.0];
        let err = parse_hourly_series(&times, &values).unwrap_err();
        assert!(matches!(
            err,
            RaincalError::MalformedSample { index: 0, .. }
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let times = vec!["2024-07-01T00:00".to_string()];
        let values = vec![0.0, 1.0];
        let err = parse_hourly_series(&times, &values).unwrap_err();
        assert!(matches!(err, RaincalError::MalformedSample { .. }));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let times = vec!["2024-07-01T00:00".to_string()];
        let values = vec![f64::NAN];
        assert!(parse_hourly_series(&times, &values).is_err());
    }

    #[test]
    fn test_parse_daily_series() {
        let dates = vec!["2024-07-01".to_string(), "2024-07-02".to_string()];
        let sums = vec![3.5, 0.0];
        let daily = parse_daily_series(&dates, &sums).unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].precipitation_sum_mm, 3.5);
    }
}
