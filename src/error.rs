//! Error types for prompt handling and video generation.

/// Errors that can occur while preparing or running a generation.
#[derive(Debug, thiserror::Error)]
pub enum VeoGenError {
    /// API key missing or rejected by the remote service.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limited by the generation service")]
    RateLimited,

    /// Content was blocked by safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// The prompt failed local validation.
    #[error(transparent)]
    InvalidPrompt(#[from] crate::prompt::PromptError),

    /// A generation was attempted without a configured credential.
    #[error("no API key configured; call set_api_key first")]
    NotConfigured,

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote call succeeded but the response carried no usable payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl VeoGenError {
    /// Returns true if this error is likely transient and worth retrying.
    ///
    /// The crate itself never retries; this is a hint for the caller's
    /// retry affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network(_))
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, VeoGenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptError;

    #[test]
    fn test_is_retryable() {
        assert!(VeoGenError::RateLimited.is_retryable());

        assert!(!VeoGenError::Auth("bad key".into()).is_retryable());
        assert!(!VeoGenError::NotConfigured.is_retryable());
        assert!(!VeoGenError::ContentBlocked("nsfw".into()).is_retryable());
        assert!(!VeoGenError::UnexpectedResponse("empty".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = VeoGenError::Api {
            status: 404,
            message: "Not found".into(),
        };
        assert_eq!(err.to_string(), "API error: 404 - Not found");

        let err = VeoGenError::NotConfigured;
        assert_eq!(
            err.to_string(),
            "no API key configured; call set_api_key first"
        );
    }

    #[test]
    fn test_prompt_error_converts() {
        let err: VeoGenError = PromptError::Empty.into();
        assert!(matches!(err, VeoGenError::InvalidPrompt(PromptError::Empty)));
        assert!(!err.is_retryable());
    }
}
