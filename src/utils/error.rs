use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl FixtureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Create the destination's parent directory first; it is never created automatically"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check write permissions on the destination directory"
                }
                _ => "Check that the destination path is valid and the disk has free space",
            },
            Self::TomlError(_) | Self::ConfigError { .. } => {
                "Check the syntax of the configuration file"
            }
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Fix the reported configuration value and run again"
            }
        }
    }

    /// Process exit status: 1 for write failures, 2 for configuration failures.
    pub fn exit_code(&self) -> i32 {
        if self.is_io() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_keeps_source_and_path() {
        let err = FixtureError::io(
            "missing/page.tsx",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );

        assert!(err.is_io());
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("missing/page.tsx"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.recovery_suggestion().contains("parent directory"));
    }

    #[test]
    fn test_config_errors_use_distinct_exit_code() {
        let err = FixtureError::MissingConfigError {
            field: "destination".to_string(),
        };
        assert!(!err.is_io());
        assert_eq!(err.exit_code(), 2);
    }
}
