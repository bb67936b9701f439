//! HTTP client for the Ollama generate endpoint.
//!
//! One request, one response. There is no streaming, no retry, and no
//! provider fallback: a local model either answers or the whole commit flow
//! stops with a typed error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InferenceConfig;
use crate::error::InferenceError;

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Sampling options forwarded to the model.
#[derive(Debug, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub num_predict: u32,
}

/// Response body; only the generated text is of interest.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// The inference collaborator: a prompt in, generated text out.
///
/// Production talks to Ollama over HTTP; tests substitute a fake.
#[async_trait]
pub trait InferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Talks to a locally hosted Ollama server.
pub struct OllamaClient {
    http: reqwest::Client,
    config: InferenceConfig,
}

impl OllamaClient {
    pub fn new(config: InferenceConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.num_predict,
            },
        };

        debug!(
            "POST {} (model: {}, prompt: {} chars)",
            self.config.endpoint,
            self.config.model,
            prompt.len()
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| InferenceError::Unreachable {
                endpoint: self.config.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json().await.map_err(InferenceError::DecodeFailed)?;

        // A field that is absent, null, or blank is equally unusable
        match body.response {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(InferenceError::EmptyResponse),
        }
    }
}
