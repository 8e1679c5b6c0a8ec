//! Loadout Importer
//!
//! Reads journal `Loadout` events and prints the resolved ship models as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use ship_loadout::core::config::{set_config, ImportConfig};
use ship_loadout::{Catalogs, LoadoutError, LoadoutEvent, VehicleModel};

/// Loadout Importer - journal Loadout events to resolved ships
#[derive(Parser, Debug)]
#[command(name = "loadout_import")]
#[command(about = "Resolve journal Loadout events against the ship and module catalogs")]
struct Args {
    /// Loadout event files, one JSON object each
    #[arg(required = true)]
    events: Vec<PathBuf>,

    /// Directory holding ships.toml, modules.toml and modifications.toml
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Import config (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full model instead of a summary
    #[arg(long)]
    full: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct ImportSummary<'a> {
    file: String,
    ship: &'a str,
    name: Option<&'a str>,
    ident: Option<&'a str>,
    modules: usize,
    engineered: usize,
    power_priorities: &'a str,
    power_enabled: &'a str,
    modifications: &'a str,
}

impl<'a> ImportSummary<'a> {
    fn new(file: &Path, model: &'a VehicleModel) -> Self {
        let codes = model.codes();
        Self {
            file: file.display().to_string(),
            ship: &model.ship_id,
            name: model.name.as_deref(),
            ident: model.ident.as_deref(),
            modules: model.modules().count(),
            engineered: model.modules().filter(|m| m.is_engineered()).count(),
            power_priorities: &codes.power_priorities,
            power_enabled: &codes.power_enabled,
            modifications: &codes.modifications,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ship_loadout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &args.config {
        match ImportConfig::load_file(path) {
            Ok(config) => {
                // Nothing has read the global config yet
                let _ = set_config(config);
            }
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::from(2);
            }
        }
    }

    let catalogs = match Catalogs::load_directory(&args.data) {
        Ok(catalogs) => catalogs,
        Err(e) => {
            eprintln!("Failed to load catalogs from {}: {}", args.data.display(), e);
            return ExitCode::from(2);
        }
    };
    let builder = catalogs.builder();

    let mut failures = 0;
    for path in &args.events {
        match import(&builder, path) {
            Ok(model) => {
                let output = if args.full {
                    render(&model, args.pretty)
                } else {
                    render(&ImportSummary::new(path, &model), args.pretty)
                };
                match output {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{}: {}", path.display(), e);
                        failures += 1;
                    }
                }
            }
            Err(e) => {
                tracing::error!(file = %path.display(), "import failed: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn import(
    builder: &ship_loadout::LoadoutBuilder<'_>,
    path: &Path,
) -> Result<VehicleModel, LoadoutError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadoutError::Catalog(ship_loadout::CatalogError::Io(e)))?;
    let event: LoadoutEvent = serde_json::from_str(&content)?;
    builder.build(&event)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
