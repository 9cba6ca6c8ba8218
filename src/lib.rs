pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, FixtureConfig};
pub use crate::core::writer::FileWriter;
pub use domain::fixture::{DEFAULT_DESTINATION, PAGE_CONTENT};
pub use domain::model::{Content, Destination, WriteReport};
pub use utils::error::{FixtureError, Result};
