//! Configuration module
//!
//! Display, theme and behavior settings loaded from a TOML file.

#[allow(clippy::module_inception)]
pub mod config;

pub use config::Config;
