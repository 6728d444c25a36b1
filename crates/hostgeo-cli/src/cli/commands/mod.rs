//! Command implementations.

pub mod borders;
pub mod config;
pub mod geo;
pub mod lookup;
pub mod media;
pub mod resolve;
pub mod shell;

use hostgeo::{Endpoints, LocationLookupPipeline, LookupClient, RetryConfig};
use std::time::Duration;

use crate::education::Explain;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Upstream service endpoints
    pub endpoints: Endpoints,

    /// Per-request timeout
    pub timeout: Duration,

    /// Whether `lookup` looks for embedded video servers
    pub media: bool,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,
}

impl Context {
    /// Create a lookup client for the configured endpoints.
    pub fn client(&self) -> anyhow::Result<LookupClient> {
        let client = LookupClient::builder()
            .endpoints(self.endpoints.clone())
            .timeout(self.timeout)
            .retry(RetryConfig::default())
            .build()?;
        Ok(client)
    }

    /// Create a pipeline, with the media pass only if `media` is set.
    pub fn pipeline(&self, media: bool) -> anyhow::Result<LocationLookupPipeline> {
        let pipeline = LocationLookupPipeline::new(self.client()?);
        Ok(if media { pipeline } else { pipeline.without_media() })
    }

    /// Print an explanation if `--explain` is on and output is for humans.
    pub fn explain(&self, explain: impl FnOnce() -> Explain) {
        if self.explain && self.output_format == OutputFormat::Pretty {
            explain().print();
        }
    }

    /// Spinner shown while requests are in flight (pretty output only).
    pub fn spinner(&self, message: String) -> indicatif::ProgressBar {
        if self.output_format != OutputFormat::Pretty {
            return indicatif::ProgressBar::hidden();
        }

        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
