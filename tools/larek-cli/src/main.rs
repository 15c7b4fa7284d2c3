//! Larek CLI - a terminal storefront for the Web-larek shop.
//!
//! Commands:
//! - `larek catalog` - List the products on sale
//! - `larek checkout` - Buy products in one go
//! - `larek shop` - Browse, fill the basket and check out interactively
//! - `larek config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, CheckoutArgs, ConfigArgs};

/// Larek CLI - Shop the Web-larek catalog from the terminal
#[derive(Parser)]
#[command(name = "larek")]
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
    /// List the products on sale
    Catalog(CatalogArgs),

    /// Buy products without prompts
    Checkout(CheckoutArgs),

    /// Shop interactively
    Shop,

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
    logging::init(&ctx.config.logging, cli.verbose);
    tracing::debug!(source = ?ctx.config_path, origin = %ctx.config.api.origin, "configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
