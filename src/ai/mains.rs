use crate::ai::client::{ContentGenerator, GenerateRequest};
use crate::ai::error::AiError;
use crate::ai::parse::parse_json;
use crate::ai::retry::{generate_with_retry, RetryPolicy};
use crate::models::EvaluationResult;

pub fn scaffold_prompt(topic: &str, prompt: &str) -> String {
    format!(
        "{} for the topic: \"{}\". Format the output as a markdown list.",
        prompt, topic
    )
}

/// Brainstorming content for one note section, as markdown.
pub async fn generate_scaffold<G>(
    generator: &G,
    policy: RetryPolicy,
    topic: &str,
    prompt: &str,
) -> Result<String, AiError>
where
    G: ContentGenerator + ?Sized,
{
    let request = GenerateRequest::text(scaffold_prompt(topic, prompt));
    let response = generate_with_retry(generator, &request, policy).await?;
    if response.trim().is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(response)
}

pub fn evaluation_prompt(topic: &str, notes: &str) -> String {
    format!(
        r#"You are an expert UPSC Mains exam evaluator. A student has prepared notes on the topic: "{topic}".
Here are their notes:
---
{notes}
---

Evaluate these notes based on standard UPSC criteria (Structure, Content, Relevance, Diverse Perspectives, Use of Data/Examples).

Provide your feedback in the following JSON format. For each section, provide the feedback as a markdown-formatted string. Also include an "additionalContent" section with relevant facts, figures, reports, or perspectives the student may have missed.
{{
    "strengths": "markdown list of strengths",
    "weaknesses": "markdown list of weaknesses",
    "suggestions": "markdown list of suggestions for improvement",
    "additionalContent": "markdown list of additional data, facts, or perspectives"
}}"#
    )
}

pub async fn evaluate_notes<G>(
    generator: &G,
    policy: RetryPolicy,
    topic: &str,
    notes: &str,
) -> Result<EvaluationResult, AiError>
where
    G: ContentGenerator + ?Sized,
{
    tracing::info!(topic, notes_len = notes.len(), "Evaluating mains notes");
    let request = GenerateRequest::json(evaluation_prompt(topic, notes));
    let response = generate_with_retry(generator, &request, policy).await?;
    parse_json("evaluate notes", &response)
}
