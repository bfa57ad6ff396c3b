use crate::ai::client::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::ai::retry::{INITIAL_DELAY_MS, MAX_RETRIES};
use crate::ai::{ModelConfig, RetryPolicy};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "air1-prep", version, about = "AI-assisted UPSC Prelims and Mains preparation in your terminal")]
pub struct Cli {
    /// OpenRouter model used for every request
    #[arg(long, env = "AIR1_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, env = "AIR1_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    #[arg(long, env = "AIR1_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Attempts per request when the API reports rate limiting
    #[arg(long, env = "AIR1_MAX_RETRIES", default_value_t = MAX_RETRIES, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub max_retries: u32,

    /// Backoff before the first retry; doubles on every further retry
    #[arg(long, env = "AIR1_INITIAL_DELAY_MS", default_value_t = INITIAL_DELAY_MS)]
    pub initial_delay_ms: u64,

    /// Where the database, log file and exports live
    #[arg(long, env = "AIR1_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub retry: RetryPolicy,
    pub data_dir: PathBuf,
    /// Whether an API key is present at startup.
    pub ai_enabled: bool,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            model: ModelConfig {
                model: cli.model,
                temperature: Some(cli.temperature),
                max_tokens: Some(cli.max_tokens),
            },
            retry: RetryPolicy {
                max_attempts: cli.max_retries,
                initial_delay: Duration::from_millis(cli.initial_delay_ms),
            },
            data_dir: cli.data_dir.unwrap_or_else(crate::db::default_data_dir),
            ai_enabled: std::env::var("OPENROUTER_API_KEY")
                .map(|k| !k.trim().is_empty())
                .unwrap_or(false),
        }
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }
}
