//! Historical rainfall report command.
//!
//! Fetches daily precipitation sums for a trailing window ending today
//! (the dashboard's observed window is 15 days) and prints each day with
//! its intensity band plus the classified window total.

use crate::render;
use chrono::{Duration, Local, NaiveDate};
use log::{info, warn};
use raincal_core::date_range::DateRange;
use raincal_core::location::Location;
use raincal_core::open_meteo::{self, ArchiveResponse};

pub async fn run_history(
    location_name: &str,
    days: u32,
    input: Option<&str>,
) -> anyhow::Result<()> {
    let location = Location::find(location_name)?;
    let end_date = Local::now().date_naive();
    let start_date = end_date - Duration::days(days as i64 - 1);
    info!(
        "History for {} from {} to {}",
        location.name, start_date, end_date
    );

    let response = load_history(&location, start_date, end_date, input).await?;
    let sums = response.into_daily_sums()?;

    // the archive can lag by a day or two; say so instead of failing
    let expected = DateRange(start_date, end_date).count();
    if sums.len() < expected {
        warn!(
            "History window covers {} days but the response has {}",
            expected,
            sums.len()
        );
    }

    println!(
        "Historical rainfall for {} ({} to {})\n",
        location.name, start_date, end_date
    );
    print!("{}", render::history_table(&sums)?);
    Ok(())
}

async fn load_history(
    location: &Location,
    start_date: NaiveDate,
    end_date: NaiveDate,
    input: Option<&str>,
) -> anyhow::Result<ArchiveResponse> {
    if let Some(path) = input {
        info!("Reading saved archive response from {}", path);
        let body = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&body)?);
    }
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let response = open_meteo::fetch_daily_history(
        &client,
        location.latitude,
        location.longitude,
        start_date,
        end_date,
    )
    .await?;
    Ok(response)
}
