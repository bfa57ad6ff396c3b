use crate::ai::error::AiError;
use async_trait::async_trait;
use openrouter_api::{
    models::provider_preferences::ProviderPreferences,
    models::provider_preferences::ProviderSort,
    types::chat::{ChatCompletionRequest, Message},
};
use serde::Serialize;

pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_MAX_TOKENS: u32 = 8192;

const SYSTEM_PROMPT: &str = "You are an expert mentor for the UPSC Civil Services Examination. \
Be accurate, exam-oriented and concise.";

#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}

/// One outbound generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// The caller will parse the reply as JSON.
    pub expects_json: bool,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expects_json: false,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expects_json: true,
        }
    }
}

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError>;
}

#[derive(Debug)]
pub struct OpenRouterClient {
    client: openrouter_api::OpenRouterClient<openrouter_api::Ready>,
    config: ModelConfig,
}

impl OpenRouterClient {
    /// Builds a client from `OPENROUTER_API_KEY`.
    pub fn new(config: ModelConfig) -> Result<Self, AiError> {
        let client = openrouter_api::OpenRouterClient::quick()
            .map_err(|e| AiError::Unavailable(format!("failed to create OpenRouter client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn build_request(&self, request: &GenerateRequest) -> ChatCompletionRequest {
        let system = if request.expects_json {
            format!(
                "{} Respond ONLY with valid JSON (no markdown fences, no extra text).",
                SYSTEM_PROMPT
            )
        } else {
            SYSTEM_PROMPT.to_string()
        };

        let messages = vec![
            Message::text("system", &system),
            Message::text("user", &request.prompt),
        ];

        let provider = ProviderPreferences::new().with_sort(ProviderSort::Throughput);

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            provider: Some(provider),
            stream: None,
            response_format: None,
            tools: None,
            tool_choice: None,
            models: None,
            transforms: None,
            route: None,
            user: None,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: None,
            top_k: None,
            frequency_penalty: None,
            presence_penalty: None,
            repetition_penalty: None,
            min_p: None,
            top_a: None,
            seed: None,
            stop: None,
            logit_bias: None,
            logprobs: None,
            top_logprobs: None,
            prediction: None,
            parallel_tool_calls: None,
            verbosity: None,
        }
    }
}

#[async_trait]
impl ContentGenerator for OpenRouterClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        tracing::debug!(model = %self.config.model, json = request.expects_json, "Sending generation request");

        let response = self
            .client
            .chat()
            .map_err(AiError::api)?
            .chat_completion(self.build_request(request))
            .await
            .map_err(|e| AiError::Api(format!("OpenRouter API error: {}", e)))?;

        let Some(choice) = response.choices.first() else {
            return Err(AiError::EmptyResponse);
        };

        let text = match &choice.message.content {
            openrouter_api::MessageContent::Text(text) => text.clone(),
            openrouter_api::MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|p| {
                    if let openrouter_api::ContentPart::Text(tc) = p {
                        Some(tc.text.clone())
                    } else {
                        None
                    }
                })
                .collect::<Vec<String>>()
                .join("\n"),
        };

        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Scripted generator for tests: replays the queued results in order.
#[cfg(test)]
pub struct MockGenerator {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<String, AiError>>>,
    prompts: std::sync::Mutex<Vec<GenerateRequest>>,
}

#[cfg(test)]
impl MockGenerator {
    pub fn new(responses: Vec<Result<String, AiError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.into()),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[cfg(test)]
#[async_trait]
impl ContentGenerator for MockGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        self.prompts.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AiError::EmptyResponse))
    }
}
