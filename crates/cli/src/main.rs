//! Cart CLI - Drive the storefront cart store from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! cart catalog
//!
//! # Put two units of product 3 in the cart, then look at it
//! cart add 3
//! cart increase 3
//! cart show
//!
//! # Start over
//! cart clear
//! ```
//!
//! The cart lives in `<CART_STORAGE_DIR>/cart.json` between runs.
//!
//! # Commands
//!
//! - `catalog` - List purchasable products
//! - `show` - Show cart lines and total
//! - `add`, `remove`, `increase`, `decrease` - Change one line
//! - `clear` - Empty the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use cartstore_core::ProductId;
use cartstore_storefront::{CartConfig, LogFormat};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about = "Storefront cart CLI")]
struct Cli {
    /// Directory holding the persisted cart (overrides `CART_STORAGE_DIR`)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// JSON or YAML catalog file (overrides `CART_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List purchasable products
    Catalog,
    /// Show cart lines and total
    Show,
    /// Add one unit of a catalog product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Remove a product's line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Add one unit to a line (max 5)
    Increase {
        /// Product ID
        id: ProductId,
    },
    /// Take one unit from a line (min 1)
    Decrease {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    let cli = Cli::parse();

    let config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the global subscriber.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartstore_storefront=info,cartstore_cli=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(cli: Cli, mut config: CartConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let mut out = std::io::stdout().lock();
    let mut store = commands::open_store(&config)?;

    match cli.command {
        Commands::Catalog => commands::render::catalog(&mut out, store.data())?,
        Commands::Show => commands::render::cart(&mut out, &store)?,
        Commands::Add { id } => {
            commands::cart::add(&mut store, id)?;
            commands::render::cart(&mut out, &store)?;
        }
        Commands::Remove { id } => {
            commands::cart::remove(&mut store, id)?;
            commands::render::cart(&mut out, &store)?;
        }
        Commands::Increase { id } => {
            commands::cart::increase(&mut store, id)?;
            commands::render::cart(&mut out, &store)?;
        }
        Commands::Decrease { id } => {
            commands::cart::decrease(&mut store, id)?;
            commands::render::cart(&mut out, &store)?;
        }
        Commands::Clear => {
            store.clear_cart()?;
            commands::render::cart(&mut out, &store)?;
        }
    }
    Ok(())
}
