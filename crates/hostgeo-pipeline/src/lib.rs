//! Hostname to location lookup pipeline.
//!
//! [`LocationLookupPipeline`] resolves a host over DNS-over-HTTPS, geolocates
//! the address, lists the neighboring countries and, optionally, repeats the
//! same steps for the server hosting video embedded in the page.
//!
//! ```rust,ignore
//! use hostgeo_client::LookupClient;
//! use hostgeo_pipeline::{LocationLookupPipeline, LookupEvent};
//!
//! let pipeline = LocationLookupPipeline::new(LookupClient::new()?);
//! let result = pipeline
//!     .lookup_with("https://www.bbc.com/news", |event| match event {
//!         LookupEvent::Primary(report) => println!("site: {}", report.location.summary()),
//!         LookupEvent::Media(report) => println!("video: {}", report.hostname),
//!     })
//!     .await?;
//! ```

#![doc(html_root_url = "https://docs.rs/hostgeo-pipeline/0.3.0")]

pub mod media;
mod pipeline;
mod session;

pub use media::{CorsProxyFetcher, MediaHostExtractor, PageFetcher};
pub use pipeline::{LocationLookupPipeline, LookupEvent};
pub use session::{SearchOutcome, SearchSession, SearchTicket};
