//! Core types and errors for the hostgeo lookup pipeline.
//!
//! This crate provides the foundational types used across the hostgeo workspace:
//!
//! - **Types**: Wire representations of the DNS-over-HTTPS, GeoIP and country
//!   metadata responses, and the domain records built from them
//! - **Hostnames**: [`extract_hostname`] turns free-form input into a bare host
//! - **Errors**: The lookup error taxonomy with [`LookupError`]
//!
//! # Example
//!
//! ```rust
//! use hostgeo_core::{extract_hostname, Hostname};
//!
//! assert_eq!(extract_hostname("https://example.com:8080/path?x=1"), "example.com");
//!
//! let host = Hostname::parse("example.com/page").unwrap();
//! assert_eq!(host.as_str(), "example.com");
//! ```

#![doc(html_root_url = "https://docs.rs/hostgeo-core/0.3.0")]

mod error;
mod hostname;
pub mod types;

pub use error::{LookupError, Result};
pub use hostname::{extract_hostname, fetchable_url, Hostname};
pub use types::*;
