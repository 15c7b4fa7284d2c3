//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use serde_json::json;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let urls = ctx.config.urls();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "source": ctx.config_path.as_ref().map(|p| p.display().to_string()),
            "config": ctx.config,
            "api_url": urls.api_url,
            "cdn_url": urls.cdn_url,
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("origin", &ctx.config.api.origin);
    ctx.output.kv("api_path", &ctx.config.api.api_path);
    ctx.output.kv("cdn_path", &ctx.config.api.cdn_path);
    ctx.output.kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", ctx.config.logging.format.as_str());

    ctx.output.info("");
    ctx.output.info("Derived:");
    ctx.output.kv("api_url", &urls.api_url);
    ctx.output.kv("cdn_url", &urls.cdn_url);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
