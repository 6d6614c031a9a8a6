//! Error types for run configuration and layout.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading or validating a run configuration.
#[derive(Debug, Error)]
pub enum SpecError {
    /// No configuration file exists at the given path.
    #[error("no configuration file found at {}", path.display())]
    ConfigNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The configuration file does not contain the requested section.
    #[error("configuration section '{section}' not found in {}", path.display())]
    SectionNotFound {
        /// Requested section name.
        section: String,
        /// Configuration file path.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value is out of range or malformed.
    #[error("invalid configuration value for '{field}': {message}")]
    InvalidValue {
        /// Offending field name.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// I/O error while reading configuration or creating directories.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates an invalid-value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_helper() {
        let err = SpecError::invalid_value("sampling_rate", "must be positive");
        assert!(err.to_string().contains("sampling_rate"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_section_not_found_names_section() {
        let err = SpecError::SectionNotFound {
            section: "noisy_speech".to_string(),
            path: PathBuf::from("synth.cfg"),
        };
        assert!(err.to_string().contains("noisy_speech"));
        assert!(err.to_string().contains("synth.cfg"));
    }
}
