//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_commerce::vendors::NameCollator;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = &ctx.config.storefront;
    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output.kv("page_size", &storefront.page_size.to_string());
    ctx.output.kv("load_delay_ms", &storefront.load_delay_ms.to_string());
    ctx.output.kv("collation_locale", &storefront.collation_locale);

    let logging = &ctx.config.logging;
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &logging.level.to_string().to_lowercase());
    ctx.output.kv("format", &format!("{:?}", logging.format).to_lowercase());
    if !logging.directives.is_empty() {
        ctx.output.kv("directives", &logging.directives.join(", "));
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    // --json writes storefront.json instead of the commented TOML template.
    let name = if ctx.output.is_json() {
        CONFIG_FILE_NAMES[2]
    } else {
        CONFIG_FILE_NAMES[0]
    };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        CliConfig::default().save(&config_path.to_string_lossy())?;
        ctx.output.json(&serde_json::json!({ "created": config_path.display().to_string() }));
    } else {
        fs::write(&config_path, generate_default_config())?;
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.storefront.validate() {
        errors.push(e.to_string());
    }

    if let Err(e) = NameCollator::new(&ctx.config.storefront.collation_locale) {
        errors.push(e.to_string());
    }

    if let Err(e) = ctx.config.logging.env_filter() {
        errors.push(e.to_string());
    }

    if ctx.config.storefront.load_delay_ms == 0 {
        warnings.push("storefront.load_delay_ms is 0; pages load instantly".to_string());
    }

    if ctx.config_path.is_none() {
        warnings.push("No config file found; using defaults".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
