//! Glasstock CLI - manage the vehicle-glass inventory from the terminal

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use glasstock::storage::InventoryStore;
use glasstock::{config, ui, Error, PartLocation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "glasstock")]
#[command(version)]
#[command(about = "Vehicle-glass inventory over a single-file SQLite store")]
#[command(long_about = r#"
Glasstock tracks brands, vehicle models and glass part records
(windshields, door glass, vents, quarter glass, back glass) with a
stock count per model year.

Example usage:
  glasstock init
  glasstock add-brand Toyota
  glasstock add-model Corolla --brand-id 1
  glasstock add-part WINDSHIELD --year 2019 --stock 4 --brand-id 1 --model-id 1
  glasstock models --brand-name Toyota
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (defaults to glasstock.toml, then .glasstock/glasstock.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a glasstock.toml config and create the database
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Register a new brand
    AddBrand {
        /// Brand name (must be unique)
        name: String,
    },

    /// Register a new model under a brand
    AddModel {
        /// Model name (must be unique)
        name: String,

        /// Id of the owning brand
        #[arg(short, long)]
        brand_id: i64,
    },

    /// Register a glass part record for a model
    AddPart {
        /// Part location code (e.g. WINDSHIELD, LFDOOR, RBQUARTER)
        location: String,

        /// Model year (free text, e.g. "2019" or "2014-2018")
        #[arg(short, long)]
        year: String,

        /// Initial stock count
        #[arg(short, long, default_value = "0")]
        stock: i64,

        /// Id of the owning brand
        #[arg(short, long)]
        brand_id: i64,

        /// Id of the owning model
        #[arg(short, long)]
        model_id: i64,
    },

    /// Overwrite the stock count of a part record
    SetStock {
        /// Part record id
        id: i64,

        /// New stock count
        stock: i64,
    },

    /// List all brands
    Brands {
        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// List models for a brand, by id or by name
    Models {
        /// Look up by brand id
        #[arg(short = 'b', long)]
        brand_id: Option<i64>,

        /// Look up by brand name (includes the brand in the output)
        #[arg(short = 'n', long)]
        brand_name: Option<String>,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// List part records for a model
    Parts {
        /// Model id
        model_id: i64,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Show inventory statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(None)?.unwrap_or_default();
    init_logging(cli.verbose, &config)?;

    let db_path = cli
        .database
        .clone()
        .or_else(|| config.database.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| config::default_database_path_in(Path::new(".")));

    match cli.command {
        Commands::Init { force } => {
            let config_path = config::default_config_path();
            let new_config = config::GlasstockConfig {
                database: Some(db_path.to_string_lossy().into_owned()),
                log_file: None,
            };
            config::write_config(&config_path, &new_config, force)?;

            config::ensure_db_dir(&db_path)?;
            InventoryStore::open(&db_path)?;
            ui::success(&format!(
                "initialized {} and {}",
                config_path.display(),
                db_path.display()
            ));
        }

        Commands::AddBrand { name } => {
            let store = open_store(&db_path)?;
            match store.create_brand(&name) {
                Ok(id) => ui::success(&format!("added brand '{name}' with id {id}")),
                Err(Error::Duplicate) => anyhow::bail!("brand '{name}' already exists"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::AddModel { name, brand_id } => {
            let store = open_store(&db_path)?;
            match store.create_model(&name, brand_id) {
                Ok(id) => ui::success(&format!("added model '{name}' with id {id}")),
                Err(Error::Duplicate) => anyhow::bail!("model '{name}' already exists"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::AddPart {
            location,
            year,
            stock,
            brand_id,
            model_id,
        } => {
            let location: PartLocation = location.parse().map_err(|e| {
                let codes: Vec<&str> = PartLocation::all().iter().map(|l| l.as_str()).collect();
                anyhow::anyhow!("{e} (expected one of: {})", codes.join(", "))
            })?;

            let store = open_store(&db_path)?;
            match store.create_windshield(location, &year, stock, brand_id, model_id) {
                Ok(id) => ui::success(&format!("added {location} part with id {id}")),
                Err(Error::Duplicate) => anyhow::bail!("part record already exists"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::SetStock { id, stock } => {
            let store = open_store(&db_path)?;
            let changed = store.update_stock(id, stock)?;
            if changed == 0 {
                ui::warn(&format!("no part record with id {id}; nothing updated"));
            } else {
                ui::success(&format!("stock for part {id} set to {stock}"));
            }
        }

        Commands::Brands { json } => {
            let store = open_store(&db_path)?;
            let brands = store.all_brands()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&brands)?);
            } else if brands.is_empty() {
                ui::info("brands", "none");
            } else {
                println!("{}", ui::brands_table(&brands));
            }
        }

        Commands::Models {
            brand_id,
            brand_name,
            json,
        } => {
            let store = open_store(&db_path)?;
            match (brand_id, brand_name) {
                (Some(id), None) => {
                    let models = store.find_models_by_brand_id(id)?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&models)?);
                    } else if models.is_empty() {
                        ui::info("models", "none");
                    } else {
                        println!("{}", ui::models_table(&models));
                    }
                }
                (None, Some(name)) => {
                    let models = store.find_models_by_brand_name(&name)?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&models)?);
                    } else if models.is_empty() {
                        ui::info("models", "none");
                    } else {
                        println!("{}", ui::models_with_brand_table(&models));
                    }
                }
                _ => anyhow::bail!("pass exactly one of --brand-id or --brand-name"),
            }
        }

        Commands::Parts { model_id, json } => {
            let store = open_store(&db_path)?;
            let parts = store.find_windshields_by_model_id(model_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else if parts.is_empty() {
                ui::info("parts", "none");
            } else {
                println!("{}", ui::parts_table(&parts));
            }
        }

        Commands::Stats => {
            let store = open_store(&db_path)?;
            let stats = store.stats()?;
            ui::header("Inventory");
            println!("{}", ui::stats_table(&stats));
        }
    }

    Ok(())
}

fn open_store(db_path: &Path) -> anyhow::Result<InventoryStore> {
    config::ensure_db_dir(db_path)?;
    Ok(InventoryStore::open(db_path)?)
}

/// Log to stdout and, mirroring the original tool's dual-writer logger, to a
/// log file next to the database.
fn init_logging(verbose: bool, config: &config::GlasstockConfig) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let log_path = config
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config::default_log_path_in(Path::new(".")));
    config::ensure_db_dir(&log_path)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_writer(std::sync::Mutex::new(log_file))
                .with_ansi(false),
        )
        .with(filter)
        .init();

    Ok(())
}
