pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::query::QueryEngine;
pub use domain::model::{City, Limits, Neighborhood, QueryMode, QueryOutcome, Road};
pub use utils::error::{Result, RoadError};
