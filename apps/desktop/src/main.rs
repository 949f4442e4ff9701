use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::StatusClient;
use shared::domain::Airport;

mod config;
mod render;

#[derive(Parser, Debug)]
#[command(name = "flightpulse", about = "Flight status lookups and airport dashboards")]
struct Args {
    /// Status backend base URL; overrides the config file and environment.
    #[arg(long)]
    backend_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the live status of a single flight.
    Flight {
        /// Flight number, e.g. DL345.
        number: String,
        /// Departure date (YYYY-MM-DD or MM/DD/YYYY).
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the on-time/delayed/cancelled summary for an airport.
    Dashboard {
        /// Airport code (ATL, JFK, LAX or ORD).
        #[arg(long, default_value = "ATL", value_parser = parse_airport)]
        airport: Airport,
    },
}

fn parse_airport(raw: &str) -> Result<Airport, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = config::load_settings();
    let backend_url = args.backend_url.unwrap_or(settings.backend_url);
    let client = StatusClient::with_timeout(
        &backend_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;

    match args.command {
        Command::Flight { number, date } => {
            let flow = client.flight_lookup();
            let state = flow.lookup(&number, date.as_deref()).await;
            render::flight_state(&state);
        }
        Command::Dashboard { airport } => {
            let flow = client.airport_summary();
            let state = flow.select(airport).await;
            render::dashboard_state(&state);
        }
    }

    Ok(())
}
