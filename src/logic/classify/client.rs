//! Classifier HTTP client
//!
//! Talks to an OpenAI-compatible chat-completions endpoint (Ollama by
//! default). The request path never propagates a failure: transport errors,
//! bad statuses, and unparseable bodies all degrade to the unknown/0.0
//! fallback so the fusion stage stays total.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

use super::prompt;
use super::types::ClassificationResult;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classifier returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("classifier response contained no choices")]
    EmptyResponse,
}

// Chat-completions wire format (the subset we use)

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Deserialize)]
struct ChatContent {
    content: String,
}

/// Client for the external intent/impact classifier.
pub struct ScreenerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ScreenerClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.llm_base_url.trim_end_matches('/').to_string(),
            api_key: config.llm_api_key.clone(),
            model: config.llm_model.clone(),
        })
    }

    /// Classify sanitized text. Total: any failure becomes the fallback.
    pub async fn classify(&self, text: &str) -> ClassificationResult {
        match self.request(text).await {
            Ok(content) => prompt::parse_classification(&content),
            Err(e) => {
                tracing::warn!("Classifier unavailable: {}", e);
                ClassificationResult::fallback("classifier unavailable")
            }
        }
    }

    async fn request(&self, text: &str) -> Result<String, ClassifyError> {
        let user_prompt = prompt::instruction(text);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: 0.0,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClassifyError::Status(response.status()));
        }

        let chat: ChatResponse = response.json().await?;
        let choice = chat
            .choices
            .into_iter()
            .next()
            .ok_or(ClassifyError::EmptyResponse)?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let body = ChatRequest {
            model: "phi3:latest",
            messages: vec![ChatMessage {
                role: "system",
                content: prompt::SYSTEM_PROMPT,
            }],
            temperature: 0.0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "phi3:latest");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn test_chat_response_decodes() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"{}"}}]}"#;
        let chat: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(chat.choices[0].message.content, "{}");
    }
}
