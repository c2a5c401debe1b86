//! Error types for tidyscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyscribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Engine errors — fatal, terminate the run
    #[error("ASR engine unavailable: {message}")]
    EngineUnavailable {
        message: String,
        details: Option<String>,
    },

    // Input errors
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TidyscribeError {
    /// Diagnostic detail text, when the error carries any.
    pub fn details(&self) -> Option<&str> {
        match self {
            TidyscribeError::EngineUnavailable { details, .. } => details.as_deref(),
            _ => None,
        }
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, TidyscribeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_file_not_found_display() {
        let error = TidyscribeError::ConfigFileNotFound {
            path: "/path/to/config.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found at /path/to/config.toml"
        );
    }

    #[test]
    fn test_config_parse_display() {
        let error = TidyscribeError::ConfigParse {
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: invalid TOML syntax"
        );
    }

    #[test]
    fn test_config_invalid_value_display() {
        let error = TidyscribeError::ConfigInvalidValue {
            key: "dedup.similarity_threshold".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for dedup.similarity_threshold: must be between 0 and 1"
        );
    }

    #[test]
    fn test_engine_unavailable_display() {
        let error = TidyscribeError::EngineUnavailable {
            message: "cuDNN libraries not found".to_string(),
            details: Some("libcudnn_ops.so missing".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "ASR engine unavailable: cuDNN libraries not found"
        );
        assert_eq!(error.details(), Some("libcudnn_ops.so missing"));
    }

    #[test]
    fn test_engine_unavailable_without_details() {
        let error = TidyscribeError::EngineUnavailable {
            message: "unsupported device".to_string(),
            details: None,
        };
        assert_eq!(error.details(), None);
    }

    #[test]
    fn test_input_not_found_display() {
        let error = TidyscribeError::InputNotFound {
            path: "/tmp/missing.json".to_string(),
        };
        assert_eq!(error.to_string(), "Input not found: /tmp/missing.json");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: TidyscribeError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: TidyscribeError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_details_is_none_for_non_engine_errors() {
        let error = TidyscribeError::InputNotFound {
            path: "x".to_string(),
        };
        assert!(error.details().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<TidyscribeError>();
        assert_sync::<TidyscribeError>();
    }
}
