use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based configuration, e.g.
///
/// ```toml
/// destination = "package/src/app/(backoffice)/reglages/page.tsx"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub destination: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let destination = validate_required_field("destination", &self.destination)?;
        validate_path("destination", destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_destination() {
        let config =
            TomlConfig::from_toml_str(r#"destination = "web/src/app/page.tsx""#).unwrap();
        assert_eq!(config.destination.as_deref(), Some("web/src/app/page.tsx"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "destination = \"/tmp/page.tsx\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.destination.as_deref(), Some("/tmp/page.tsx"));
    }

    #[test]
    fn test_missing_destination_fails_validation() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.validate(),
            Err(FixtureError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TomlConfig::from_toml_str("content = \"hello\"").unwrap_err();
        assert!(matches!(err, FixtureError::TomlError(_)));
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/fixture.toml").unwrap_err();
        assert!(matches!(err, FixtureError::ConfigError { .. }));
    }
}
