use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use trade_gate::TradeValidator;
use trade_gate::config::fetch_config;
use trade_gate::denom::DenomRegistry;
use trade_gate::models::TradeType;
use trade_gate::sample::sample_trade_data_json;

#[derive(Parser)]
#[command(name = "trade-gate")]
#[command(about = "Validate real-world-asset trade data payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a trade data payload and print the decoded record
    Validate {
        /// Payload file; reads stdin when omitted
        path: Option<PathBuf>,
    },

    /// Print the denom a quantity in the given currency must use
    Denom {
        currency: String,
    },

    /// Print a valid sample payload (buy, sell, fiat-deposit, fiat-withdrawal)
    Sample {
        #[arg(value_parser = parse_sample_type)]
        trade_type: TradeType,
    },
}

/// Only named trade types have a valid sample.
fn parse_sample_type(s: &str) -> Result<TradeType, String> {
    let trade_type: TradeType = s.parse()?;
    if trade_type.is_known() {
        Ok(trade_type)
    } else {
        Err(format!("no sample for trade type {trade_type}"))
    }
}

fn run(command: Commands, registry: &DenomRegistry, out: &mut impl Write) -> trade_gate::Result<()> {
    match command {
        Commands::Validate { path } => {
            let payload = match &path {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let validator = TradeValidator::new(registry.clone());
            let trade_data = validator.validate(&payload)?;
            info!(
                trade_type = %trade_data.trade_info.trade_type,
                ticker = %trade_data.trade_info.ticker,
                "Payload is valid"
            );
            writeln!(out, "{}", serde_json::to_string_pretty(&trade_data)?)?;
        }
        Commands::Denom { currency } => {
            writeln!(out, "{}", registry.denom_for(&currency))?;
        }
        Commands::Sample { trade_type } => {
            writeln!(out, "{}", sample_trade_data_json(trade_type))?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the command output.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let result = fetch_config()
        .and_then(|app_config| run(cli.command, &app_config.registry, &mut std::io::stdout()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
