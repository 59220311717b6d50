//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod search;
pub mod vendors;

use std::str::FromStr;

use anyhow::{bail, Context as _};
use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term (empty lists the whole catalog).
    #[arg(default_value = "")]
    pub term: String,

    /// Extra pages to load after the first.
    #[arg(short, long, default_value = "0")]
    pub pages: usize,

    /// Override the configured page size.
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the vendors command.
#[derive(Args)]
pub struct VendorsArgs {
    /// Product ids that must all be in stock.
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Items to add, as ID or IDxQTY (e.g. 2x3).
    #[arg(short, long = "add", required = true)]
    pub add: Vec<CartItemArg>,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Initial search term.
    #[arg(short, long, default_value = "")]
    pub term: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// One `--add` value: a product id and a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemArg {
    pub product_id: String,
    pub quantity: u32,
}

impl FromStr for CartItemArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (id, quantity) = match s.rsplit_once(['x', 'X']) {
            Some((id, qty)) => {
                let quantity = qty
                    .parse::<u32>()
                    .with_context(|| format!("Invalid quantity in '{}'", s))?;
                (id, quantity)
            }
            None => (s, 1),
        };
        if id.is_empty() {
            bail!("Missing product id in '{}'", s);
        }
        Ok(Self {
            product_id: id.to_string(),
            quantity,
        })
    }
}
