pub mod ai;
pub mod ai_worker;
pub mod config;
pub mod db;
pub mod file_io;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;
pub mod workflow;

// Re-exports for convenience
pub use ai::{AiError, ContentGenerator, ModelConfig, OpenRouterClient, RetryPolicy, DEFAULT_MODEL};
pub use ai_worker::spawn_ai_worker;
pub use config::{AppConfig, Cli};
pub use models::{AiEnvelope, AiRequest, AiResponse, Screen, Theme};
pub use workflow::{Action, AiLink, App};
