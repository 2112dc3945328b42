use thiserror::Error;

/// Result type for radclass operations
pub type Result<T> = std::result::Result<T, RadclassError>;

/// Error types for radclass operations
#[derive(Error, Debug)]
pub enum RadclassError {
    /// A keyword pattern failed to compile
    #[error("Pattern error: {0}")]
    PatternError(String),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Required request field absent or empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Response serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RadclassError {
    /// HTTP status a function host should answer with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RadclassError::InvalidBody(_) | RadclassError::MissingField(_) => 400,
            _ => 500,
        }
    }

    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        self.status_code() == 400
    }
}

impl From<regex::Error> for RadclassError {
    fn from(e: regex::Error) -> Self {
        RadclassError::PatternError(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RadclassError::InvalidBody("x".into()).status_code(), 400);
        assert_eq!(RadclassError::MissingField("cr".into()).status_code(), 400);
        assert_eq!(RadclassError::PatternError("bad".into()).status_code(), 500);
        assert!(!RadclassError::PatternError("boom".into()).is_client_error());
    }

    #[test]
    fn test_regex_error_conversion() {
        let err: RadclassError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, RadclassError::PatternError(_)));
        assert!(err.to_string().starts_with("Pattern error:"));
    }
}
