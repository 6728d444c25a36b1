//! Hostname → IP → location → neighbors, with an optional media-host pass.

use crate::media::{CorsProxyFetcher, MediaHostExtractor, PageFetcher};
use chrono::Utc;
use hostgeo_client::LookupClient;
use hostgeo_core::{fetchable_url, HostReport, Hostname, LookupError, LookupResult, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Progress notifications emitted while a lookup runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    /// The primary host is fully looked up; the media pass has not started
    Primary(HostReport),
    /// A media host was found and looked up
    Media(HostReport),
}

/// Runs the complete lookup for a user-typed target
///
/// Every step is awaited in order. The primary pass must succeed for a
/// result to exist; border data and the media pass only ever add detail.
#[derive(Clone)]
pub struct LocationLookupPipeline {
    client: LookupClient,
    media: Option<MediaHostExtractor>,
}

impl LocationLookupPipeline {
    /// Create a pipeline whose media pass uses the client's CORS proxy
    #[must_use]
    pub fn new(client: LookupClient) -> Self {
        let fetcher = Arc::new(CorsProxyFetcher::new(client.clone()));
        Self {
            client,
            media: Some(MediaHostExtractor::new(fetcher)),
        }
    }

    /// Fetch pages for the media pass with `fetcher` instead of the proxy
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.media = Some(MediaHostExtractor::new(fetcher));
        self
    }

    /// Skip the media pass entirely
    #[must_use]
    pub fn without_media(mut self) -> Self {
        self.media = None;
        self
    }

    /// Returns true if the media pass is enabled
    #[must_use]
    pub const fn media_enabled(&self) -> bool {
        self.media.is_some()
    }

    /// Look up `raw` and return the complete result
    pub async fn lookup(&self, raw: &str) -> Result<LookupResult> {
        self.lookup_with(raw, |_| {}).await
    }

    /// Look up `raw`, reporting each finished part through `on_event`
    ///
    /// The primary report is delivered before the media pass begins, so a slow
    /// or failing proxy never delays it.
    pub async fn lookup_with<F>(&self, raw: &str, on_event: F) -> Result<LookupResult>
    where
        F: FnMut(LookupEvent),
    {
        self.run(0, raw, on_event).await
    }

    pub(crate) async fn run<F>(
        &self,
        generation: u64,
        raw: &str,
        mut on_event: F,
    ) -> Result<LookupResult>
    where
        F: FnMut(LookupEvent),
    {
        let primary = self.lookup_primary(raw).await?;
        info!(
            generation,
            host = %primary.hostname,
            ip = %primary.ip,
            "primary lookup complete"
        );
        on_event(LookupEvent::Primary(primary.clone()));

        let media = self.lookup_media(&fetchable_url(raw)).await;
        if let Some(report) = &media {
            on_event(LookupEvent::Media(report.clone()));
        }

        Ok(LookupResult {
            generation,
            primary,
            media,
            looked_up_at: Utc::now(),
        })
    }

    /// Resolve, locate and enrich the host named in `raw`
    ///
    /// Empty input fails before any request is made.
    pub async fn lookup_primary(&self, raw: &str) -> Result<HostReport> {
        let hostname = Hostname::parse(raw)?;
        self.report_for(hostname).await
    }

    /// Look up the server hosting embedded video on `page_url`
    ///
    /// Returns `None` when the pass is disabled, no video is found, or any
    /// step fails. Failures are logged, never returned.
    pub async fn lookup_media(&self, page_url: &str) -> Option<HostReport> {
        let extractor = self.media.as_ref()?;
        let hostname = extractor.discover(page_url).await?;

        match self.report_for(hostname).await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(page_url, error = %e, "media host lookup failed");
                None
            }
        }
    }

    async fn report_for(&self, hostname: Hostname) -> Result<HostReport> {
        let outcome = self.client.dns().resolve_a(&hostname).await;
        let Some(ip) = outcome.ip() else {
            debug!(%hostname, ?outcome, "hostname did not resolve");
            return Err(LookupError::Unresolved {
                hostname: hostname.to_string(),
            });
        };

        let location = self.client.geo().locate(ip).await?;

        let borders = match location.country_code.as_deref() {
            Some(code) if !code.is_empty() => self.client.countries().borders(code).await,
            _ => None,
        };

        Ok(HostReport {
            hostname,
            ip,
            location,
            borders,
        })
    }
}
