// src/advisor/mod.rs
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Missing API key (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Service returned no feedback")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;

/// Free-form security advice about a password from an external service.
pub trait AdvisoryClient {
    fn advise(&self, password: &str) -> Result<String>;
}

pub fn build_prompt(password: &str) -> String {
    format!(
        "Analyze the security of the password '{}' and provide detailed recommendations for improvement.",
        password
    )
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChatMessage>,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if it has any.
    pub fn first_content(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(String::from)
    }
}

/// Talks to an OpenAI-compatible `chat/completions` endpoint (Gemini by default).
pub struct GeminiAdvisor {
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    client: reqwest::blocking::Client,
}

impl GeminiAdvisor {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.advisor_base_url,
            &config.advisor_model,
            config.api_key.clone(),
            config.advisor_timeout,
        )
    }

    fn request_for(&self, password: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(build_prompt(password)),
            }],
        }
    }
}

impl AdvisoryClient for GeminiAdvisor {
    fn advise(&self, password: &str) -> Result<String> {
        let api_key = self.api_key.as_ref().ok_or(AdvisoryError::MissingApiKey)?;
        let url = format!("{}/chat/completions", self.base_url);

        log::debug!("Requesting advice from {} using model {}", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&self.request_for(password))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("Advisory service returned {}", status);
            return Err(AdvisoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json()?;
        body.first_content().ok_or(AdvisoryError::EmptyResponse)
    }
}

/// Text shown in place of advice when the service call failed.
pub fn describe_failure(error: &AdvisoryError) -> String {
    match error {
        AdvisoryError::EmptyResponse => "Could not generate feedback. Please try again.".to_string(),
        other => format!("Error generating feedback: {}", other),
    }
}
