//! Heartmap server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the first of
//! `~/.config/heartmap/config.toml`, `/etc/heartmap/config.toml`,
//! `./heartmap.toml`) with environment overrides:
//! - `HEARTMAP_HOST`, `HEARTMAP_PORT`, `HEARTMAP_STATIC_DIR`
//! - `HEARTMAP_APP_KEY`: Kakao JavaScript app key
//! - `HEARTMAP_LOG_LEVEL`, `HEARTMAP_LOG_FORMAT`
//! - `RUST_LOG`: overrides the configured log level

use anyhow::Context;
use clap::{Parser, Subcommand};
use heartmap::{generate_default_config, AppState, Config, LoadedConfig, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "heartmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve a map of shared places marked with hearts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the page and its settings
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a default config file
    InitConfig,

    /// List the seed locations
    Locations {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig => {
            print!("{}", generate_default_config());
        }
        Commands::Locations { json } => {
            let loaded = load_config(cli.config.as_ref())?;
            for warning in &loaded.warnings {
                eprintln!("warning: {}", warning);
            }
            print_locations(&loaded.config, json)?;
        }
        Commands::Serve { host, port } => {
            let loaded = load_config(cli.config.as_ref())?;
            init_tracing(&loaded.config.logging);
            loaded.log();

            let mut config = loaded.config;

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting Heartmap v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Static directory: {:?}", config.server.static_dir);

            let state = AppState::new(config);
            tracing::info!("Serving {} seed locations", state.seed.len());

            heartmap::serve(state).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<LoadedConfig> {
    match path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::load_default()),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("heartmap={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn print_locations(config: &Config, json: bool) -> anyhow::Result<()> {
    let seed = config.seed();

    if json {
        println!("{}", serde_json::to_string_pretty(&seed)?);
        return Ok(());
    }

    println!("{:<4} {:<24} {:>12} {:>12}", "#", "TITLE", "LAT", "LNG");
    for (idx, location) in seed.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>12.6} {:>12.6}",
            idx + 1,
            location.title,
            location.lat,
            location.lng
        );
    }

    Ok(())
}
