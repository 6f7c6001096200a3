//! CLI entry point for the calculation service.
//!
//! Runs the HTTP API, or computes a summary or percentage directly from the
//! command line.

use anyhow::Result;
use calc_service::{
    config::Config,
    output::{print_json, print_pretty},
    server::serve,
    stats::{calculate_percentage, summarize},
    telemetry::init_logging,
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "calc_service")]
#[command(about = "A small calculation service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides CALC_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides CALC_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print count, mean, min and max of the given numbers
    Summarize {
        #[arg(value_name = "VALUES", required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Print PART as a percentage of TOTAL
    Percentage {
        #[arg(allow_negative_numbers = true)]
        part: f64,

        #[arg(allow_negative_numbers = true)]
        total: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let _log_guard = init_logging(&config.log_file_path)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let config = config.with_overrides(host, port);
            info!(?config, "Configuration loaded");
            serve(config).await?;
        }
        Commands::Summarize { values } => {
            let summary = summarize(&values)?;
            print_pretty(&summary);
            print_json(&summary)?;
        }
        Commands::Percentage { part, total } => {
            let percentage = calculate_percentage(part, total)?;
            print_json(&serde_json::json!({ "percentage": percentage }))?;
        }
    }

    Ok(())
}
