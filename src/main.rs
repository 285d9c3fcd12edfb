// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

mod api;
mod check;
mod config;
mod dates;
mod error;
mod logging;
mod models;
mod utils;

use chrono::{Local, NaiveDate};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;

use crate::api::PolygonClient;
use crate::check::{check_stock, CheckError, CheckRequest};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "stock")]
#[command(about = "Stock price lookups backed by the Polygon API", long_about = None)]
struct Cli {
    /// TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check stock price for a given symbol.
    Check {
        /// Ticker symbol, e.g. AAPL
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        symbol: String,

        /// The date to check the stock price for
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    if let Err(error) = run(cli, today).await {
        eprintln!("error: {:#}", error);
        std::process::exit(error.exit_code());
    }
}

async fn run(cli: Cli, today: NaiveDate) -> Result<(), CliError> {
    match cli.command {
        Commands::Check { symbol, date } => {
            // Input errors come before anything touches the config or the network.
            let request =
                CheckRequest::new(&symbol, date.as_deref(), today).map_err(CheckError::from)?;

            let config = config::load_config(cli.config.as_deref()).map_err(CliError::Config)?;
            let client = PolygonClient::from_provider(&config, &config.polygon_base_url)
                .map_err(CliError::Config)?;

            let mut out = std::io::stdout();
            check_stock(&client, &request, &mut out).await?;
        }
    }

    Ok(())
}
