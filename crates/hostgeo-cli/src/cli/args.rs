//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::net::Ipv4Addr;

use crate::output::OutputFormat;

/// Where is this site hosted, and who are its neighbors?
///
/// Resolves a hostname over DNS-over-HTTPS, geolocates the address, lists the
/// countries bordering it and, when the page embeds a video, does the same
/// for the video server.
/// Use --explain on any command to see which services it calls.
#[derive(Parser, Debug)]
#[command(name = "hostgeo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// DNS-over-HTTPS resolver base URL
    #[arg(long, env = "HOSTGEO_DNS_URL", global = true, hide_env_values = true)]
    pub dns_url: Option<String>,

    /// GeoIP service base URL
    #[arg(long, env = "HOSTGEO_GEO_URL", global = true, hide_env_values = true)]
    pub geo_url: Option<String>,

    /// Country metadata service base URL
    #[arg(long, env = "HOSTGEO_COUNTRIES_URL", global = true, hide_env_values = true)]
    pub countries_url: Option<String>,

    /// CORS proxy prefix used to fetch pages
    #[arg(long, env = "HOSTGEO_PROXY_URL", global = true, hide_env_values = true)]
    pub proxy_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate one or more sites and their video servers
    Lookup(LookupArgs),

    /// Resolve a hostname to its IPv4 address
    Resolve(ResolveArgs),

    /// Geolocate an IPv4 address
    Geo(GeoArgs),

    /// List the countries bordering a country
    Borders(BordersArgs),

    /// Find and locate the server hosting video embedded in a page
    Media(MediaArgs),

    /// Start interactive shell mode
    Shell(ShellArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Lookup command
// ============================================================================

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// URLs or hostnames (e.g., "https://www.bbc.com/news", "github.com")
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Skip looking for an embedded video server
    #[arg(long)]
    pub no_media: bool,
}

// ============================================================================
// Single-step commands
// ============================================================================

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Hostname or URL to resolve
    pub host: String,
}

#[derive(Args, Debug)]
pub struct GeoArgs {
    /// IPv4 address to locate
    pub ip: Ipv4Addr,
}

#[derive(Args, Debug)]
pub struct BordersArgs {
    /// Country code (ISO 3166-1 alpha-2 or alpha-3, e.g. "CH" or "CHE")
    pub code: String,
}

#[derive(Args, Debug)]
pub struct MediaArgs {
    /// Page URL to scan for embedded video
    pub url: String,
}

// ============================================================================
// Shell command
// ============================================================================

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Skip looking for embedded video servers
    #[arg(long)]
    pub no_media: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., dns_url, output_format, media)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["hostgeo", "-o", "json", "lookup", "a.com", "b.org", "--no-media"])
            .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Lookup(args) => {
                assert_eq!(args.targets, ["a.com", "b.org"]);
                assert!(args.no_media);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_geo_rejects_non_ipv4() {
        assert!(Cli::try_parse_from(["hostgeo", "geo", "2001:db8::1"]).is_err());
        assert!(Cli::try_parse_from(["hostgeo", "geo", "8.8.8.8"]).is_ok());
    }
}
