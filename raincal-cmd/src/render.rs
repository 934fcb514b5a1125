//! Plain-text rendering of calendar grids, hourly detail, legend, and
//! summary blocks. Functions return `String`s so output stays testable.

use chrono::NaiveDate;
use raincal_core::calendar::WeekBucket;
use raincal_core::intensity::{classify, legend, IntensityBand};
use raincal_core::sample::{DailySum, HourlySample};
use raincal_core::summary::RainfallSummary;
use std::fmt::Write;

fn range_label(band: &IntensityBand) -> String {
    if band.lower_mm == 0.0 && band.upper_mm == 0.0 {
        "= 0".to_string()
    } else if band.upper_mm.is_infinite() {
        format!("> {}", band.lower_mm)
    } else {
        format!("({}, {}]", band.lower_mm, band.upper_mm)
    }
}

/// Render the weekly calendar grid, one line per day, with the intensity
/// band and display color of each day's total.
pub fn calendar_grid(weeks: &[WeekBucket]) -> anyhow::Result<String> {
    let mut out = String::new();
    for week in weeks {
        writeln!(out, "Week {} (total {:.1} mm)", week.index, week.total_mm)?;
        for day in &week.days {
            let band = classify(day.total_mm)?;
            writeln!(
                out,
                "  {}  {:>7.1} mm  {:<12} {}",
                day.date.format("%d %b %Y"),
                day.total_mm,
                band.label,
                band.color
            )?;
        }
    }
    Ok(out)
}

/// Render the hourly breakdown of a selected day.
pub fn day_detail(day: NaiveDate, hours: &[HourlySample]) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "{} - Hourly Rainfall", day.format("%-d %B %Y"))?;
    if hours.is_empty() {
        writeln!(out, "  no samples for this day")?;
        return Ok(out);
    }
    for hour in hours {
        let band = classify(hour.precipitation_mm)?;
        writeln!(
            out,
            "  {}  {:>5.1} mm  {:<12} {}",
            hour.timestamp.format("%H:%M"),
            hour.precipitation_mm,
            band.label,
            band.color
        )?;
    }
    Ok(out)
}

/// Render the historical daily report with a classified total.
pub fn history_table(sums: &[DailySum]) -> anyhow::Result<String> {
    let mut out = String::new();
    let mut window_total = 0.0;
    for daily in sums {
        let band = classify(daily.precipitation_sum_mm)?;
        window_total += daily.precipitation_sum_mm;
        writeln!(
            out,
            "  {}  {:>7.1} mm  {:<12} {}",
            daily.date.format("%d %b %Y"),
            daily.precipitation_sum_mm,
            band.label,
            band.color
        )?;
    }
    let band = classify(window_total)?;
    writeln!(
        out,
        "  window total {:.1} mm ({})",
        window_total, band.label
    )?;
    Ok(out)
}

/// Render the summary block: total, mean, wettest and driest days.
pub fn summary_block(summary: &RainfallSummary) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Total {:.1} mm over the window, mean {:.1} mm/day",
        summary.total_mm, summary.mean_mm
    )?;
    writeln!(
        out,
        "Wettest day: {} ({:.1} mm, {})",
        summary.wettest.date,
        summary.wettest.total_mm,
        classify(summary.wettest.total_mm)?.label
    )?;
    writeln!(
        out,
        "Driest day:  {} ({:.1} mm, {})",
        summary.driest.date,
        summary.driest.total_mm,
        classify(summary.driest.total_mm)?.label
    )?;
    Ok(out)
}

/// Render the nine-band intensity legend.
pub fn legend_table() -> String {
    let mut out = String::from("Rainfall Intensity Legend\n");
    for band in legend() {
        out.push_str(&format!(
            "  {:<12} {:<16} {}\n",
            band.label,
            range_label(band),
            band.color
        ));
    }
    out
}
