use thiserror::Error;

/// Unified error type for numbump operations
#[derive(Error, Debug)]
pub enum NumbumpError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in numbump
pub type Result<T> = std::result::Result<T, NumbumpError>;

impl NumbumpError {
    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        NumbumpError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NumbumpError::Config(msg.into())
    }

    /// Create a document error with context
    pub fn document(msg: impl Into<String>) -> Self {
        NumbumpError::Document(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumbumpError::config("overwrite needs a file");
        assert_eq!(err.to_string(), "Configuration error: overwrite needs a file");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NumbumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NumbumpError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (NumbumpError::parse("x"), "Version parsing error"),
            (NumbumpError::config("x"), "Configuration error"),
            (NumbumpError::document("x"), "Document error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        for err in [
            NumbumpError::parse(""),
            NumbumpError::config(""),
            NumbumpError::document(""),
        ] {
            // The variant prefix is present even without a message
            assert!(!err.to_string().is_empty());
        }
    }
}
