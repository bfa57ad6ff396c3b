pub mod client;
pub mod error;
pub mod mains;
pub mod parse;
pub mod prelims;
pub mod retry;

// Public API exports
pub use client::{ContentGenerator, GenerateRequest, ModelConfig, OpenRouterClient, DEFAULT_MODEL};
pub use error::AiError;
pub use retry::{generate_with_retry, RetryPolicy};

use crate::models::{AiOutput, AiRequest};

/// Runs one workflow request against `generator`.
pub async fn execute<G>(generator: &G, policy: RetryPolicy, request: AiRequest) -> Result<AiOutput, AiError>
where
    G: ContentGenerator + ?Sized,
{
    match request {
        AiRequest::AnalyzeSources { month, year } => {
            prelims::analyze_sources(generator, policy, &month, year)
                .await
                .map(AiOutput::Topics)
        }
        AiRequest::GenerateQuiz { topic } => prelims::generate_quiz(generator, policy, &topic)
            .await
            .map(AiOutput::Quiz),
        AiRequest::GenerateScaffold { topic, prompt } => {
            mains::generate_scaffold(generator, policy, &topic, &prompt)
                .await
                .map(AiOutput::Scaffold)
        }
        AiRequest::EvaluateNotes { topic, notes } => {
            mains::evaluate_notes(generator, policy, &topic, &notes)
                .await
                .map(AiOutput::Evaluation)
        }
        AiRequest::AnalyzePyq {
            question,
            user_answer,
        } => prelims::analyze_pyq(generator, policy, &question, user_answer.as_deref())
            .await
            .map(AiOutput::Pyq),
    }
}
