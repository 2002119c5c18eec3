//! Billed main entry point

use anyhow::Context;
use billed_api::{start_server, AppState};
use billed_config::{Config, ConfigError};
use billed_core::MemoryBillStore;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "billed")]
#[command(author = "Billed Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight expense-report web interface for employees", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Load the configuration, falling back to defaults when the file is missing
fn load_config(path: &PathBuf) -> anyhow::Result<Config> {
    match Config::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound { path }) => {
            eprintln!("[WARN] Config file not found: {}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => {
            for suggestion in e.to_details().suggestions {
                eprintln!("[HINT] {}", suggestion);
            }
            Err(e).with_context(|| format!("Failed to load configuration from {}", path.display()))
        }
    }
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = load_config(&args.config)?;
    init_logging(&config);
    log::info!("Config loaded: listen={}, seed_file={:?}", config.listen_addr(), config.store.seed_file);

    let rt = Runtime::new()?;

    rt.block_on(async {
        let prefix = config.store.receipt_url_prefix.clone();
        let store = match &config.store.seed_file {
            Some(seed_file) if seed_file.exists() => {
                MemoryBillStore::from_seed_file(&prefix, seed_file)
                    .await
                    .with_context(|| format!("Failed to seed store from {}", seed_file.display()))?
            }
            Some(seed_file) => {
                log::warn!("Seed file not found: {}, starting empty", seed_file.display());
                MemoryBillStore::new(&prefix)
            }
            None => MemoryBillStore::new(&prefix),
        };

        let state = AppState::new(config, Arc::new(store));
        start_server(state).await.context("Server error")
    })
}
