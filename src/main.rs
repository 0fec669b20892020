mod catalog;
mod config;
mod geo;
mod n2yo;
mod position;
mod propagation;
mod refresh;
mod tle;
mod trajectory;
mod visibility;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use crate::catalog::{FileStore, MemoryStore, SatelliteStore};
use crate::config::Config;
use crate::n2yo::N2yoClient;
use crate::position::PositionResolver;
use crate::propagation::Sgp4Propagator;
use crate::refresh::{RefreshHandle, Refresher};
use crate::tle::OrbitalElementSet;
use crate::web::AppState;

#[derive(Parser)]
#[command(name = "sat-vis")]
#[command(about = "Satellite position and visibility service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server and the periodic refresh
    Serve {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },
    /// Run a single refresh cycle and print the report
    Refresh {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },
    /// Parse a TLE file and print its elements
    Validate { tle: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Refresh { config } => refresh(&config).await,
        Commands::Validate { tle } => validate(&tle),
    }
}

fn load_config(path: &str) -> Option<Config> {
    match Config::from_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            None
        }
    }
}

fn build_state(config: &Config) -> AppState {
    let store: Arc<dyn SatelliteStore> = match &config.catalog.folder {
        Some(folder) => Arc::new(FileStore::new(folder.clone())),
        None => {
            log::warn!("No catalog folder configured, records are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };
    let propagator = Arc::new(Sgp4Propagator::new(config.propagation.max_epoch_offset_days));
    let resolver = PositionResolver::new(store, propagator)
        .with_visibility(config.visibility)
        .with_trajectory(config.trajectory);

    let client = N2yoClient::new(config.n2yo.base_url.clone(), config.n2yo.api_key.clone());
    let refresher = Refresher::new(client, resolver.clone())
        .with_fetch_timeout(config.refresh.fetch_timeout)
        .with_concurrency(config.refresh.concurrency);

    AppState {
        resolver,
        refresher: Arc::new(refresher),
    }
}

async fn serve(path: &str) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };
    let state = build_state(&config);

    let worker = if config.refresh.enabled {
        Some(RefreshHandle::spawn(
            state.refresher.clone(),
            config.refresh.period,
        ))
    } else {
        log::info!("Periodic refresh disabled");
        None
    };

    let result = web::run_server(&config.web, state).await;

    if let Some(worker) = worker {
        worker.stop().await;
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn refresh(path: &str) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };
    let state = build_state(&config);

    match state.refresher.refresh_all().await {
        Ok(report) => {
            println!("Updated {} satellites", report.updated.len());
            for satid in &report.updated {
                println!("  {}: ok", satid);
            }
            for failure in &report.failures {
                println!("  {}: {}", failure.satid, failure.error);
            }
            if report.failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Refresh failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let text = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match OrbitalElementSet::parse(&text) {
        Ok(elements) => {
            println!(
                "TLE is valid: {} ({})",
                elements.catalog_number,
                elements.object_name.as_deref().unwrap_or("unnamed")
            );
            println!("  epoch:               {}", elements.epoch);
            println!("  inclination:         {:.4} deg", elements.inclination_deg);
            println!("  right ascension:     {:.4} deg", elements.right_ascension_deg);
            println!("  eccentricity:        {:.7}", elements.eccentricity);
            println!("  arg. of perigee:     {:.4} deg", elements.argument_of_perigee_deg);
            println!("  mean anomaly:        {:.4} deg", elements.mean_anomaly_deg);
            println!("  mean motion:         {:.8} rev/day", elements.mean_motion_rev_per_day);
            println!("  drag term:           {:e}", elements.drag_term);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid TLE: {}", e);
            ExitCode::FAILURE
        }
    }
}
