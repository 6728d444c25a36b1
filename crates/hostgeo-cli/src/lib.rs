//! # hostgeo-cli
//!
//! Command-line interface for the hostgeo lookup pipeline.
//!
//! ## Features
//!
//! - **Full lookup**: hostname → IP → location → neighboring countries
//! - **Media servers**: finds the host serving embedded video and locates it too
//! - **Single steps**: `resolve`, `geo`, `borders` and `media` run one stage each
//! - **Educational mode**: `--explain` describes the requests a command makes
//! - **Interactive shell**: REPL that keeps only the latest search
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
