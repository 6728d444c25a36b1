//! `hostgeo config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    if let Some(text) = ctx.output_format.serialize(&config)? {
        println!("{text}");
        return Ok(());
    }

    let endpoints = config.endpoints();
    let not_set = "(default)".dimmed().to_string();
    let shown = |value: &Option<String>, fallback: &str| match value {
        Some(v) => v.clone(),
        None => format!("{fallback} {not_set}"),
    };

    println!("{}", "Current Configuration:".bold());
    println!();
    println!("  {} {}", "dns_url:".bold(), shown(&config.dns_url, &endpoints.dns));
    println!("  {} {}", "geo_url:".bold(), shown(&config.geo_url, &endpoints.geo));
    println!(
        "  {} {}",
        "countries_url:".bold(),
        shown(&config.countries_url, &endpoints.countries)
    );
    println!("  {} {}", "proxy_url:".bold(), shown(&config.proxy_url, &endpoints.proxy));
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        config
            .timeout_secs
            .map_or_else(|| not_set.clone(), |t| t.to_string())
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or(OutputFormat::Pretty)
    );
    println!("  {} {}", "media:".bold(), config.media);
    println!("  {} {}", "explain_by_default:".bold(), config.explain_by_default);

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
