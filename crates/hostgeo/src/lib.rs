//! Resolve a host, geolocate it and list the neighboring countries.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hostgeo::{LocationLookupPipeline, LookupClient};
//!
//! #[tokio::main]
//! async fn main() -> hostgeo::Result<()> {
//!     let pipeline = LocationLookupPipeline::new(LookupClient::new()?);
//!
//!     let result = pipeline.lookup("https://www.wikipedia.org").await?;
//!     println!("{} -> {}", result.primary.hostname, result.primary.ip);
//!     println!("Location: {}", result.primary.location.summary());
//!
//!     if let Some(borders) = &result.primary.borders {
//!         for neighbor in &borders.neighbors {
//!             println!("  {neighbor}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/hostgeo/0.3.0")]

// Re-export core types
pub use hostgeo_core::*;

// Re-export client
pub use hostgeo_client::{Endpoints, LookupClient, LookupClientBuilder, RetryConfig};

// Re-export pipeline
pub use hostgeo_pipeline::{
    media, CorsProxyFetcher, LocationLookupPipeline, LookupEvent, MediaHostExtractor,
    PageFetcher, SearchOutcome, SearchSession, SearchTicket,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
