/// Failures of a generation request.
///
/// Every non-success HTTP status collapses into `RequestFailed`; the detail
/// is for the log, the message is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Gemini API key not set. Please add it in Settings.")]
    MissingApiKey,

    #[error("Failed to fetch from Gemini API")]
    RequestFailed { detail: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Failures of the local key/value store and the file-level collaborators
/// built on it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_hides_detail() {
        let err = GenerationError::RequestFailed { detail: "status 503".to_string() };
        assert_eq!(err.to_string(), "Failed to fetch from Gemini API");
    }

    #[test]
    fn test_missing_key_points_to_settings() {
        assert!(GenerationError::MissingApiKey.to_string().contains("Settings"));
    }
}
