mod config;
mod cors;
mod logging;
mod server;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use calculator::Service;
use calculator_sdk::CalculatorClientV1 as _;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Calculator Server - arithmetic API with in-memory history
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - arithmetic API with in-memory history")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Evaluate one operation in-process and print the result
    Eval {
        /// add, subtract, multiply, divide, power or sqrt
        operation: String,
        /// Operands (one for sqrt, two otherwise)
        #[arg(allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            tracing::info!("Calculator Server starting");
            server::run_server(config).await
        }
        Commands::Check => check_config(&config),
        Commands::Eval {
            operation,
            operands,
        } => eval(&config, &operation, &operands).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

async fn eval(config: &AppConfig, operation: &str, operands: &[f64]) -> Result<()> {
    let service = Arc::new(Service::new(&config.calculator));
    let client = calculator::wire_local_client(service);

    let result = client
        .evaluate(operation, operands)
        .await
        .map_err(|e| anyhow!("{e} [{}]", e.code()))?;

    println!("{result}");
    Ok(())
}
