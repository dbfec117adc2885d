//! cyberonto: search a cybersecurity taxonomy, with DBpedia results merged in.
//!
//! This crate is the application layer around [`cyberonto_search`]:
//! - **Config**: a TOML file with the taxonomy path, log filter and search settings
//! - **Startup**: loads the taxonomy snapshot and builds the aggregator
//! - **CLI**: the `cyberonto` binary (`search`, `details`, `stats`, `health`)

pub mod app_dirs;
pub mod config;
pub mod error;
pub mod startup;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use startup::SearchService;
