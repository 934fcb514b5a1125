//! Forecast calendar command.
//!
//! Fetches (or reads from a saved response) the hourly precipitation
//! forecast for a named location, aggregates it into day and week buckets,
//! and prints either the calendar grid with its summary and legend or the
//! hourly breakdown of a selected day.

use crate::render;
use chrono::NaiveDate;
use log::info;
use raincal_core::calendar::{bucket_by_day, build_view, View, ViewMode};
use raincal_core::location::Location;
use raincal_core::open_meteo::{self, ForecastResponse};
use raincal_core::summary::summarize;

pub async fn run_forecast(
    location_name: &str,
    days: u32,
    selected_day: Option<NaiveDate>,
    input: Option<&str>,
) -> anyhow::Result<()> {
    let location = Location::find(location_name)?;
    info!(
        "Forecast for {} ({}, {}), {} days",
        location.name, location.latitude, location.longitude, days
    );

    let response = load_forecast(&location, days, input).await?;
    let samples = response.into_samples()?;
    info!("Validated {} hourly samples", samples.len());

    let mode = match selected_day {
        Some(day) => ViewMode::DayDetail(day),
        None => ViewMode::Calendar,
    };

    match build_view(&samples, mode)? {
        View::Calendar(weeks) => {
            println!("Rainfall forecast for {}\n", location.name);
            print!("{}", render::calendar_grid(&weeks)?);
            let day_buckets = bucket_by_day(&samples)?;
            let summary = summarize(&day_buckets)?;
            println!();
            print!("{}", render::summary_block(&summary)?);
            println!();
            print!("{}", render::legend_table());
        }
        View::DayDetail(hours) => {
            // the mode carries the date even when the day has no samples
            if let ViewMode::DayDetail(day) = mode {
                print!("{}", render::day_detail(day, &hours)?);
            }
        }
    }

    Ok(())
}

async fn load_forecast(
    location: &Location,
    days: u32,
    input: Option<&str>,
) -> anyhow::Result<ForecastResponse> {
    if let Some(path) = input {
        info!("Reading saved forecast response from {}", path);
        let body = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&body)?);
    }
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let response = open_meteo::fetch_hourly_forecast(
        &client,
        location.latitude,
        location.longitude,
        days,
    )
    .await?;
    Ok(response)
}
