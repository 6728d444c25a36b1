//! HTTP clients for the services behind a hostgeo lookup.
//!
//! This crate provides [`LookupClient`], a thin wrapper around `reqwest` with
//! one endpoint group per upstream service:
//!
//! - [`LookupClient::dns`] resolves A records over DNS-over-HTTPS
//! - [`LookupClient::geo`] geolocates IPv4 addresses
//! - [`LookupClient::countries`] fetches country metadata and neighbors
//! - [`LookupClient::pages`] fetches arbitrary pages through a CORS proxy

#![doc(html_root_url = "https://docs.rs/hostgeo-client/0.3.0")]

mod client;
mod config;
pub mod api;

pub use client::{LookupClient, LookupClientBuilder};
pub use config::*;
pub use hostgeo_core::{LookupError, Result};
