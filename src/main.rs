//! fibworker - Main Entry Point
//!
//! Bootstraps the worker: loads configuration, wires the stdio transport to
//! the gateway, and runs until the host closes the channel or the process is
//! interrupted.

use clap::{Parser, Subcommand};
use fibworker::config::WorkerConfig;
use fibworker::gateway::Gateway;
use fibworker::observability::init_default_logging;
use fibworker::transport::{StdioTransport, Transport};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Dual-precision Fibonacci compute worker
#[derive(Parser)]
#[command(name = "fibworker")]
#[command(about = "Fibonacci compute worker over a line-delimited message channel")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the worker, reading requests from stdin
    Run,
    /// Validate configuration
    Config {
        /// Show the effective configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    info!("Starting fibworker v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run => run_worker(config).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }

    info!("Worker shutdown complete");
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<WorkerConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(WorkerConfig::load_from_file(path)?)
        }
        None => {
            // Try default locations, fall back to built-in defaults
            let default_paths = ["fibworker.toml", "config/fibworker.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(WorkerConfig::load_from_file(&path)?);
                }
            }

            info!("No configuration file found, using defaults");
            Ok(WorkerConfig::default())
        }
    }
}

async fn run_worker(config: WorkerConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Worker starting with id: {}", config.worker.id);

    let transport = Arc::new(StdioTransport::new());
    let gateway = Gateway::new(transport.clone(), &config);

    // Explicit handler registration: inbound payloads flow over this channel.
    let (tx, rx) = mpsc::channel::<String>(32);
    transport.set_message_sender(tx).await;

    let gateway_task = tokio::spawn(gateway.serve(rx));

    tokio::select! {
        result = transport.run_receive_loop() => {
            if let Err(e) = result {
                error!("Receive loop failed: {}", e);
            } else {
                info!("Host closed the message channel");
            }
        }
        _ = signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
        }
    }

    // Closing the inbound channel lets the gateway finish any in-flight
    // request and stop. The receive loop clears the sender on EOF itself;
    // the interrupt path has to do it here.
    transport.clear_message_sender().await;
    let _ = gateway_task.await;

    Ok(())
}

fn handle_config_command(
    config: WorkerConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    info!("Configuration is valid");

    if show {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}
