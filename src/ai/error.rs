use thiserror::Error;

pub const RATE_LIMIT_MESSAGE: &str =
    "The request was blocked due to rate limits. Please wait a moment before trying again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AiError {
    #[error("The request was blocked due to rate limits. Please wait a moment before trying again.")]
    RateLimited,

    #[error("{0}")]
    Api(String),

    #[error("Received an empty response from the API.")]
    EmptyResponse,

    #[error("Failed to {operation}: the AI response could not be parsed ({detail})")]
    Parse {
        operation: &'static str,
        detail: String,
    },

    #[error("{0}")]
    Invalid(String),

    #[error("AI is unavailable: {0}. Set OPENROUTER_API_KEY to enable it.")]
    Unavailable(String),
}

impl AiError {
    /// Wraps a transport/SDK failure, keeping its text so the retry wrapper
    /// can classify it.
    pub fn api(err: impl std::fmt::Display) -> Self {
        AiError::Api(err.to_string())
    }

    pub fn is_rate_limit(&self) -> bool {
        match self {
            AiError::RateLimited => true,
            AiError::Api(text) => is_rate_limit_text(text),
            _ => false,
        }
    }
}

pub fn is_rate_limit_text(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    text.contains("429") || text.contains("RESOURCE_EXHAUSTED") || lower.contains("rate limit")
}
