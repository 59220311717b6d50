//! Storefront CLI - the sports store from the terminal.
//!
//! Commands:
//! - `storefront search` - Search and page through the catalog
//! - `storefront vendors` - Vendors that stock every given product
//! - `storefront cart` - Build a cart and find vendors for it
//! - `storefront browse` - Interactive search, selection and cart
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_observability::{init_tracing, LogLevel};

use commands::{BrowseArgs, CartArgs, ConfigArgs, SearchArgs, VendorsArgs};

/// Storefront CLI - search the catalog and find vendors for a cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(SearchArgs),

    /// List vendors that stock all given products
    Vendors(VendorsArgs),

    /// Build a cart and show matching vendors
    Cart(CartArgs),

    /// Browse interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging.clone();
    if ctx.output.is_verbose() {
        logging.level = logging.level.min(LogLevel::Debug);
    }
    if let Err(e) = init_tracing(&logging) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }
    tracing::debug!(config = ?ctx.config_path, "configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Vendors(args) => commands::vendors::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
