//! raincal - Command line tool for rainfall forecast calendars.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "raincal",
    version,
    about = "Rainfall forecast calendar toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: raincal_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    raincal_cmd::run(cli.command).await
}
