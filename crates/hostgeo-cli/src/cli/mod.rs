//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Default request timeout when neither flag nor config sets one.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Flags and environment win over the config file
    let mut endpoints = config.endpoints();
    if let Some(url) = cli.dns_url {
        endpoints.dns = url;
    }
    if let Some(url) = cli.geo_url {
        endpoints.geo = url;
    }
    if let Some(url) = cli.countries_url {
        endpoints.countries = url;
    }
    if let Some(url) = cli.proxy_url {
        endpoints.proxy = url;
    }

    let timeout = Duration::from_secs(
        cli.timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );

    debug!(?endpoints, ?timeout, %output_format, "effective settings");

    // Create context for commands
    let ctx = commands::Context {
        endpoints,
        timeout,
        media: config.media,
        output_format,
        explain: cli.explain || config.explain_by_default,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Lookup(args) => commands::lookup::execute(ctx, args).await,
        Commands::Resolve(args) => commands::resolve::execute(ctx, args).await,
        Commands::Geo(args) => commands::geo::execute(ctx, args).await,
        Commands::Borders(args) => commands::borders::execute(ctx, args).await,
        Commands::Media(args) => commands::media::execute(ctx, args).await,
        Commands::Shell(args) => commands::shell::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

/// Send logs to stderr. `RUST_LOG` wins; otherwise warnings only, or debug
/// for the hostgeo crates with `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,hostgeo=debug,hostgeo_client=debug,hostgeo_pipeline=debug,hostgeo_cli=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: a global subscriber may already be set by an embedding program
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
