mod handlers;
mod replay;
mod shell;


use std::path::PathBuf;
use std::process::ExitCode;

use bayline_core::config::EngineConfig;
use bayline_core::ParkingEngine;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bayline",
    about = "Bayline parking spot allocation and billing",
    version
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ConfigArgs {
    /// JSON engine configuration file
    #[arg(long, global = true, env = "BAYLINE_CONFIG")]
    config: Option<PathBuf>,

    /// Wall-clock seconds billed as one hour
    #[arg(long, global = true, env = "BAYLINE_TIME_SCALE_SECS")]
    time_scale_secs: Option<u64>,

    /// Scaled hours before a lease is flagged overstayed
    #[arg(long, global = true, env = "BAYLINE_TTL_HOURS")]
    ttl_hours: Option<u64>,
}

impl ConfigArgs {
    fn load(&self) -> Result<EngineConfig, bayline_core::ConfigError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_path(path)?,
            None => EngineConfig::default(),
        };
        if let Some(secs) = self.time_scale_secs {
            config.time_scale_secs = secs;
        }
        if let Some(hours) = self.ttl_hours {
            config.ttl_hours = hours;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive parking menu (default)
    Shell,

    /// Replay a JSON array of timed operations from stdin
    Replay,

    /// Print the effective engine configuration
    Config,

    /// Print version information
    Version,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut engine = ParkingEngine::new(&config);
            let stdin = std::io::stdin();
            if let Err(e) = shell::run(&mut engine, stdin.lock(), std::io::stdout()) {
                tracing::error!("shell I/O failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
        Commands::Replay => {
            eprintln!("Reading replay script from stdin...");
            let mut input = String::new();
            if let Err(e) = std::io::Read::read_to_string(&mut std::io::stdin(), &mut input) {
                tracing::error!("failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }

            let results = match replay::run(&config, &input) {
                Ok(results) => results,
                Err(e) => {
                    tracing::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            match serde_json::to_string_pretty(&results) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    tracing::error!("failed to encode results: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::Config => match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("failed to encode config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Commands::Version => {
            println!("bayline {}", env!("CARGO_PKG_VERSION"));
            println!("Parking spot allocation and billing engine");
        }
    }

    ExitCode::SUCCESS
}
