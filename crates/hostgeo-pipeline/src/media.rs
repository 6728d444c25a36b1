//! Discovery of the server hosting embedded video on a page.
//!
//! The page is fetched through a [`PageFetcher`] (by default the CORS proxy
//! behind [`CorsProxyFetcher`]) and scanned for a video source in this order:
//!
//! 1. the first `<video>` element's own `src`
//! 2. the first `<source>` inside that `<video>`
//! 3. the first `<iframe>` with a `src` that either allows fullscreen or
//!    mentions a known video/embed keyword
//!
//! Everything here is best effort. Failures are logged and end in `None`.

use async_trait::async_trait;
use hostgeo_client::LookupClient;
use hostgeo_core::Hostname;
use scraper::{ElementRef, Html, Selector};
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};
use url::Url;

/// Substrings that mark an iframe as a video player
pub const IFRAME_KEYWORDS: [&str; 6] = ["youtube", "vimeo", "player", "stream", "embed", "watch"];

static VIDEO_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| parse_selector("video"));
static SOURCE_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| parse_selector("source"));
static IFRAME_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| parse_selector("iframe"));

fn parse_selector(css: &str) -> Option<Selector> {
    Selector::parse(css)
        .map_err(|e| warn!(selector = css, error = %e, "failed to parse CSS selector"))
        .ok()
}

/// Source of page HTML for media discovery
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// HTML of the page at `url`, or `None` if it could not be fetched
    async fn fetch_rendered_html(&self, url: &str) -> Option<String>;
}

/// Fetches pages through the client's CORS-bypass proxy
#[derive(Clone)]
pub struct CorsProxyFetcher {
    client: LookupClient,
}

impl CorsProxyFetcher {
    /// Create a fetcher using the proxy configured on `client`
    #[must_use]
    pub const fn new(client: LookupClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for CorsProxyFetcher {
    async fn fetch_rendered_html(&self, url: &str) -> Option<String> {
        match self.client.pages().fetch_html(url).await {
            Ok(html) if !html.trim().is_empty() => Some(html),
            Ok(_) => {
                debug!(url, "proxy returned an empty page");
                None
            }
            Err(e) => {
                warn!(url, error = %e, "proxy fetch failed");
                None
            }
        }
    }
}

/// Pick the video source on a page, resolved against `page_url`
#[must_use]
pub fn select_media_source(html: &str, page_url: &str) -> Option<String> {
    let document = Html::parse_document(html);

    if let Some(src) = video_source(&document) {
        return Some(resolve_source(page_url, &src));
    }

    let iframes = IFRAME_SELECTOR.as_ref()?;
    document
        .select(iframes)
        .find_map(|frame| video_iframe_source(frame, page_url))
}

fn video_source(document: &Html) -> Option<String> {
    let video = document.select(VIDEO_SELECTOR.as_ref()?).next()?;

    if let Some(src) = non_empty_src(video) {
        return Some(src);
    }

    let source = video.select(SOURCE_SELECTOR.as_ref()?).next()?;
    non_empty_src(source)
}

// Keywords are matched on the absolute URL, so a relative src on a
// `stream.` host still counts.
fn video_iframe_source(frame: ElementRef<'_>, page_url: &str) -> Option<String> {
    let src = resolve_source(page_url, &non_empty_src(frame)?);

    let video_like = frame.value().attr("allowfullscreen").is_some()
        || IFRAME_KEYWORDS.iter().any(|keyword| src.contains(keyword));
    video_like.then_some(src)
}

fn non_empty_src(element: ElementRef<'_>) -> Option<String> {
    element
        .value()
        .attr("src")
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(String::from)
}

/// Resolve `src` against the page it was found on
///
/// Relative and protocol-relative sources become absolute; anything that
/// cannot be joined is returned unchanged.
#[must_use]
pub fn resolve_source(page_url: &str, src: &str) -> String {
    Url::parse(page_url)
        .and_then(|base| base.join(src))
        .map_or_else(|_| src.to_string(), String::from)
}

/// Finds the host serving embedded video on a page
#[derive(Clone)]
pub struct MediaHostExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl MediaHostExtractor {
    /// Create an extractor that fetches pages with `fetcher`
    #[must_use]
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Hostname of the video source embedded in the page at `page_url`
    pub async fn discover(&self, page_url: &str) -> Option<Hostname> {
        let Some(html) = self.fetcher.fetch_rendered_html(page_url).await else {
            debug!(page_url, "no page content for media discovery");
            return None;
        };

        let Some(absolute) = select_media_source(&html, page_url) else {
            debug!(page_url, "no embedded video found");
            return None;
        };

        match Hostname::parse(&absolute) {
            Ok(host) => {
                debug!(page_url, src = %absolute, %host, "found media host");
                Some(host)
            }
            Err(_) => {
                warn!(page_url, src = %absolute, "media source has no hostname");
                None
            }
        }
    }
}
