//! Alpha Enemy - Entry Point
//!
//! Parses the request, picks a species catalog, generates the sheet and
//! prints it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use alpha_enemy::config::Settings;
use alpha_enemy::data::{FileCatalog, PokeApiClient, PokeApiConfig, SpeciesCatalog};
use alpha_enemy::{generate_sheet, GenError};

#[derive(Parser, Debug)]
#[command(name = "alpha-enemy")]
#[command(about = "Generate a randomized character sheet for a creature species", version)]
struct Args {
    /// Species name or national dex number
    species: String,

    /// Level to grow the creature to (1-100)
    level: u32,

    /// Random seed (uses entropy if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the species catalog API
    #[arg(long)]
    api_url: Option<String>,

    /// Read species documents from this directory instead of the API
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// Catalog request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the sheet as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let loaded = Settings::load();
    let mut settings = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str())
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("{}, using default settings", e);
    }
    settings.apply_env();

    if let Some(url) = &args.api_url {
        settings.api_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        settings.timeout_secs = timeout;
    }

    let catalog: Box<dyn SpeciesCatalog> = match &args.catalog_dir {
        Some(dir) => {
            log::info!("Using species documents in {:?}", dir);
            Box::new(FileCatalog::new(dir))
        }
        None => {
            log::info!("Using species catalog at {}", settings.api_url);
            let client = PokeApiClient::new(PokeApiConfig::from(&settings))
                .context("failed to create catalog client")?;
            Box::new(client)
        }
    };

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    match generate_sheet(&catalog, &args.species, args.level, &mut rng) {
        Ok(sheet) => {
            if args.json {
                let json = serde_json::to_string_pretty(&sheet)
                    .context("failed to serialize sheet")?;
                println!("{}", json);
            } else {
                print!("{}", sheet);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ (GenError::InvalidLevel(_) | GenError::InvalidSpecies { .. })) => {
            log::error!("Generation failed: {}", e);
            eprintln!("{}: {}", e.code(), e);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e).context("unexpected generation failure"),
    }
}
