//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Base URL of the OpenAI-compatible classifier endpoint
    pub llm_base_url: String,

    /// API key for the classifier endpoint (local Ollama accepts any value)
    pub llm_api_key: String,

    /// Model name for classification
    pub llm_model: String,

    /// Classifier request timeout in seconds
    pub llm_timeout_secs: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434/v1".to_string()),

            llm_api_key: env::var("LLM_API_KEY").unwrap_or_else(|_| "ollama".to_string()),

            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "phi3:latest".to_string()),

            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
