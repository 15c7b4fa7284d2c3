//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod shop;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use larek_commerce::checkout::FieldState;
use larek_commerce::PaymentMethod;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Also print each product's image URL.
    #[arg(long)]
    pub images: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product ID to buy. Repeat for several products.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Payment method: online or on-delivery.
    #[arg(short, long)]
    pub payment: PaymentMethod,

    /// Delivery address.
    #[arg(short, long)]
    pub address: String,

    /// Customer email.
    #[arg(short, long)]
    pub email: String,

    /// Customer phone.
    #[arg(long)]
    pub phone: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Fail with the field's inline message if it did not validate.
fn ensure_valid(field: &FieldState) -> Result<()> {
    if let Some(message) = field.error() {
        bail!("{}: {}", field.field().as_str(), message);
    }
    Ok(())
}
