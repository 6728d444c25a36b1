//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use hostgeo::Endpoints;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "HOSTGEO_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// DNS-over-HTTPS resolver base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_url: Option<String>,

    /// GeoIP service base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_url: Option<String>,

    /// Country metadata service base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries_url: Option<String>,

    /// CORS proxy prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Look for embedded video servers during `lookup`.
    #[serde(default = "default_true")]
    pub media: bool,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dns_url: None,
            geo_url: None,
            countries_url: None,
            proxy_url: None,
            timeout_secs: None,
            output_format: None,
            media: true,
            explain_by_default: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("io", "hostgeo", "hostgeo")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Service endpoints from this file, falling back to the public defaults.
    pub fn endpoints(&self) -> Endpoints {
        let defaults = Endpoints::default();
        Endpoints {
            dns: self.dns_url.clone().unwrap_or(defaults.dns),
            geo: self.geo_url.clone().unwrap_or(defaults.geo),
            countries: self.countries_url.clone().unwrap_or(defaults.countries),
            proxy: self.proxy_url.clone().unwrap_or(defaults.proxy),
        }
    }

    /// Set a key from its string form, as used by `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "dns_url" => self.dns_url = Some(value.to_string()),
            "geo_url" => self.geo_url = Some(value.to_string()),
            "countries_url" => self.countries_url = Some(value.to_string()),
            "proxy_url" => self.proxy_url = Some(value.to_string()),
            "timeout_secs" | "timeout" => self.timeout_secs = Some(value.parse()?),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "media" => self.media = value.parse()?,
            "explain_by_default" | "explain" => self.explain_by_default = value.parse()?,
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     dns_url            - DNS-over-HTTPS resolver base URL\n  \
                     geo_url            - GeoIP service base URL\n  \
                     countries_url      - Country metadata service base URL\n  \
                     proxy_url          - CORS proxy prefix for page fetches\n  \
                     timeout_secs       - Request timeout in seconds\n  \
                     output_format      - Default output format (pretty/json/csv/yaml)\n  \
                     media              - Look for video servers (true/false)\n  \
                     explain_by_default - Always explain commands (true/false)",
                    key
                );
            }
        }

        Ok(())
    }
}
