pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::fixture::DEFAULT_DESTINATION;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "page-fixture")]
#[command(about = "Writes the back-office settings page to disk")]
pub struct CliConfig {
    #[arg(long, help = "File to write (overrides the config file)")]
    pub destination: Option<String>,

    #[arg(long, help = "TOML file providing `destination`")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load(&self) -> Result<FixtureConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        FixtureConfig::resolve(self.destination.as_deref(), file)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(destination) = &self.destination {
            validate_path("--destination", destination)?;
        }
        Ok(())
    }
}

/// Settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub destination: PathBuf,
}

impl FixtureConfig {
    /// Flag beats file, file beats the built-in default.
    pub fn resolve(flag: Option<&str>, file: Option<TomlConfig>) -> Result<Self> {
        if let Some(file) = &file {
            file.validate()?;
        }

        let destination = match (flag, file.and_then(|f| f.destination)) {
            (Some(flag), _) => flag.to_string(),
            (None, Some(from_file)) => from_file,
            (None, None) => DEFAULT_DESTINATION.to_string(),
        };

        let config = Self {
            destination: PathBuf::from(destination),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}

impl Validate for FixtureConfig {
    fn validate(&self) -> Result<()> {
        validate_path("destination", &self.destination.to_string_lossy())
    }
}

impl ConfigProvider for FixtureConfig {
    fn destination(&self) -> &Path {
        &self.destination
    }
}
