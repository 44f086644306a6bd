// Typed errors with thiserror. Surface meaningful messages to JS.

use thiserror::Error;

/// Composer error types.
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ComposerError {
    fn from(err: serde_json::Error) -> Self {
        ComposerError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComposerError::InvalidConfig("missing field".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn json_errors_convert() {
        let err: ComposerError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ComposerError::Serialization(_)));
    }
}
