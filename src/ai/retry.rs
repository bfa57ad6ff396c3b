use crate::ai::client::{ContentGenerator, GenerateRequest};
use crate::ai::error::AiError;
use std::time::Duration;

pub const MAX_RETRIES: u32 = 3;
pub const INITIAL_DELAY_MS: u64 = 1000;

/// Bounded exponential backoff applied to rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            initial_delay: Duration::from_millis(INITIAL_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given zero-based failed attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(16));
        self.initial_delay.saturating_mul(factor)
    }
}

/// Sends `request` through `generator`, retrying rate-limit failures with
/// exponential backoff. Every other error is returned on the spot.
pub async fn generate_with_retry<G>(
    generator: &G,
    request: &GenerateRequest,
    policy: RetryPolicy,
) -> Result<String, AiError>
where
    G: ContentGenerator + ?Sized,
{
    let attempts = policy.max_attempts.max(1);

    for attempt in 0..attempts {
        match generator.generate(request).await {
            Ok(text) => return Ok(text),
            Err(err) if err.is_rate_limit() => {
                if attempt + 1 == attempts {
                    tracing::error!(error = %err, "Max retries reached for rate limit error");
                    return Err(AiError::RateLimited);
                }
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "Rate limit hit. Retrying in {}ms... (Attempt {}/{})",
                    delay.as_millis(),
                    attempt + 1,
                    attempts
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Unhandled API error");
                return Err(err);
            }
        }
    }

    Err(AiError::Api("API call failed after multiple retries.".to_string()))
}
