//! Command implementations for the raincal CLI.
//!
//! Provides subcommands for the 14-day rainfall forecast calendar, the
//! hourly breakdown of a selected day, the trailing historical report,
//! and the static legend and location tables.

use chrono::NaiveDate;
use clap::Subcommand;

pub mod forecast;
pub mod history;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Show the rainfall forecast calendar for a named location
    Forecast {
        /// Location name from the registry (see `locations`)
        #[arg(short, long)]
        location: String,

        /// Number of forecast days to request
        #[arg(long, default_value_t = 14)]
        days: u32,

        /// Show the hourly breakdown for this date instead of the calendar
        #[arg(short, long)]
        day: Option<NaiveDate>,

        /// Read a saved Open-Meteo forecast response instead of fetching
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Show historical daily rainfall for the trailing window ending today
    History {
        /// Location name from the registry (see `locations`)
        #[arg(short, long)]
        location: String,

        /// Length of the trailing window in days
        #[arg(long, default_value_t = 15)]
        days: u32,

        /// Read a saved Open-Meteo archive response instead of fetching
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the rainfall intensity legend
    Legend,

    /// List the configured locations
    Locations,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Forecast {
            location,
            days,
            day,
            input,
        } => forecast::run_forecast(&location, days, day, input.as_deref()).await,
        Command::History {
            location,
            days,
            input,
        } => history::run_history(&location, days, input.as_deref()).await,
        Command::Legend => {
            print!("{}", render::legend_table());
            Ok(())
        }
        Command::Locations => {
            for location in raincal_core::location::Location::get_location_vector() {
                println!(
                    "{:<20} {:>9.5} {:>10.5}",
                    location.name, location.latitude, location.longitude
                );
            }
            Ok(())
        }
    }
}
