//! Command-line front end: checks specimen files against a game database.
//!
//! Usage:
//!   pokemon-legality --data data/database.ron pikachu.ron
//!   pokemon-legality --config legality.ron --json box/*.json

use clap::Parser;
use pokemon_legality::{GameDatabase, LegalityAnalyzer, LegalityConfig, Specimen, SpecimenError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokemon-legality", version, about = "Checks whether stored Pokémon are legitimately obtainable")]
struct Cli {
    /// RON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game database, overriding the configured path
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Specimen files (`.ron` or `.json`)
    #[arg(required = true)]
    specimens: Vec<PathBuf>,
}

fn read_specimen(path: &Path) -> Result<Specimen, SpecimenError> {
    let content = fs::read_to_string(path)
        .map_err(|e| SpecimenError::Malformed(format!("{}: {}", path.display(), e)))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Specimen::from_json_str(&content)
    } else {
        Specimen::from_ron_str(&content)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref().map(LegalityConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    if let Some(data) = cli.data {
        config.database = data;
    }

    let db = match GameDatabase::load(&config.database) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Error loading game database: {}", e);
            return ExitCode::from(2);
        }
    };
    let analyzer = match LegalityAnalyzer::from_config(db, &config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut specimens = Vec::with_capacity(cli.specimens.len());
    let mut paths = Vec::with_capacity(cli.specimens.len());
    let mut failed = false;
    for path in &cli.specimens {
        match read_specimen(path) {
            Ok(specimen) => {
                specimens.push(specimen);
                paths.push(path);
            }
            Err(e) => {
                error!("{}", e);
                failed = true;
            }
        }
    }
    info!(count = specimens.len(), "analyzing specimens");

    let mut illegal = false;
    for (path, outcome) in paths.iter().zip(analyzer.analyze_batch(&specimens)) {
        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failed = true;
                continue;
            }
        };
        illegal |= !report.valid();
        if cli.json {
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("{}: {}", path.display(), e);
                    failed = true;
                }
            }
        } else {
            println!("== {} ==", path.display());
            println!("{}", report);
            println!();
        }
    }

    if failed {
        ExitCode::from(2)
    } else if illegal {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
