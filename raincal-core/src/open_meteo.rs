/// Open-Meteo response models and fetching logic.
///
/// The wire models are always available so a saved response can be read
/// from disk; the HTTP functions are native-only behind the `api` feature.
/// Aggregation never touches this module — series are fetched and
/// validated into memory first, then handed to `calendar`.
use crate::error::Result;
use crate::sample::{parse_daily_series, parse_hourly_series, DailySum, HourlySample};
use serde::Deserialize;

#[cfg(feature = "api")]
use crate::error::RaincalError;
#[cfg(feature = "api")]
use chrono::NaiveDate;
#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "api")]
use std::time::Duration;

/// Forecast endpoint base URL
pub const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1/forecast";

/// Historical archive endpoint base URL
pub const ARCHIVE_API_BASE: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Hourly precipitation forecast response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub hourly: HourlySeries,
}

/// Parallel arrays of local timestamps and precipitation values.
#[derive(Debug, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub precipitation: Vec<f64>,
}

/// Daily precipitation history response from the archive endpoint.
#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub daily: DailySeries,
}

#[derive(Debug, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    #[serde(rename = "precipitation_sum")]
    pub precipitation_sum: Vec<f64>,
}

impl ForecastResponse {
    /// Validate the parallel arrays into hourly samples.
    pub fn into_samples(self) -> Result<Vec<HourlySample>> {
        parse_hourly_series(&self.hourly.time, &self.hourly.precipitation)
    }
}

impl ArchiveResponse {
    /// Validate the parallel arrays into daily sums.
    pub fn into_daily_sums(self) -> Result<Vec<DailySum>> {
        parse_daily_series(&self.daily.time, &self.daily.precipitation_sum)
    }
}

/// Fetch a URL and deserialize the JSON body, with bounded retry and
/// exponential backoff.
#[cfg(feature = "api")]
async fn get_with_retry<T: for<'de> Deserialize<'de>>(
    client: &Client,
    url: &str,
    context: &str,
) -> Result<T> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;
    let mut last_status: u16 = 0;

    for attempt in 1..=max_tries {
        match client.get(url).send().await {
            Ok(response) => {
                if response.status() != StatusCode::OK {
                    last_status = response.status().as_u16();
                    warn!(
                        "Attempt {}/{}: Bad response status for {}: {}",
                        attempt,
                        max_tries,
                        context,
                        response.status()
                    );
                } else {
                    match response.json::<T>().await {
                        Ok(body) => return Ok(body),
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to decode response body for {}: {}",
                                attempt, max_tries, context, e
                            );
                            if attempt == max_tries {
                                return Err(RaincalError::HttpRequest(e));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: Request failed for {}: {}",
                    attempt, max_tries, context, e
                );
                if attempt == max_tries {
                    return Err(RaincalError::HttpRequest(e));
                }
            }
        }

        if attempt < max_tries {
            info!(
                "Sleeping for {} milliseconds before retry for {}",
                sleep_millis, context
            );
            tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    Err(RaincalError::HttpStatus(last_status))
}

/// Fetch an hourly precipitation forecast for the given coordinates.
///
/// `forecast_days` matches the Open-Meteo parameter; the source dashboard
/// requests 14.
#[cfg(feature = "api")]
pub async fn fetch_hourly_forecast(
    client: &Client,
    latitude: f64,
    longitude: f64,
    forecast_days: u32,
) -> Result<ForecastResponse> {
    let url = format!(
        "{FORECAST_API_BASE}?latitude={latitude}&longitude={longitude}&hourly=precipitation&forecast_days={forecast_days}&timezone=auto"
    );
    get_with_retry(client, &url, "hourly forecast").await
}

/// Fetch daily precipitation sums over an inclusive date window from the
/// archive endpoint.
#[cfg(feature = "api")]
pub async fn fetch_daily_history(
    client: &Client,
    latitude: f64,
    longitude: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<ArchiveResponse> {
    let url = format!(
        "{ARCHIVE_API_BASE}?latitude={latitude}&longitude={longitude}&start_date={start_date}&end_date={end_date}&daily=precipitation_sum&timezone=auto"
    );
    get_with_retry(client, &url, "daily history").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_response_deserializes() {
        let body = r#"{
            "latitude": 22.375,
            "longitude": 73.125,
            "timezone": "Asia/Kolkata",
            "hourly": {
                "time": ["2024-07-01T00:00", "2024-07-01T01:00"],
                "precipitation": [0.0, 0.3]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let samples = response.into_samples().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].precipitation_mm, 0.3);
    }

    #[test]
    fn test_archive_response_deserializes() {
        let body = r#"{
            "latitude": 22.375,
            "longitude": 73.125,
            "timezone": "Asia/Kolkata",
            "daily": {
                "time": ["2024-06-16", "2024-06-17"],
                "precipitation_sum": [12.4, 0.0]
            }
        }"#;
        let response: ArchiveResponse = serde_json::from_str(body).unwrap();
        let sums = response.into_daily_sums().unwrap();
        assert_eq!(sums.len(), 2);
        assert_eq!(sums[0].precipitation_sum_mm, 12.4);
    }

    #[test]
    fn test_malformed_response_value_rejected() {
        let body = r#"{
            "latitude": 0.0,
            "longitude": 0.0,
            "timezone": "UTC",
            "hourly": {
                "time": ["2024-07-01T00:00"],
                "precipitation": [-2.0]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_samples().is_err());
    }
}
