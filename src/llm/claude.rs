use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_ANTHROPIC_MODEL};
use crate::error::{Error, Result};
use crate::llm::parser::parse_narrative;
use crate::llm::prompts::{NarrativeRequest, SYSTEM_PROMPT};
use crate::llm::provider::NarrativeGenerator;
use crate::models::Narrative;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ClaudeMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    error: Option<ClaudeError>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ClaudeError {
    message: String,
}

impl ClaudeProvider {
    pub fn new(api_key: String, model: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
            endpoint: MESSAGES_URL.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.anthropic_api_key.clone(),
            Some(config.anthropic_model.clone()),
            config.llm_timeout,
        )
    }

    /// Points the provider at a different Messages endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl NarrativeGenerator for ClaudeProvider {
    async fn generate(&self, request: &NarrativeRequest) -> Result<Narrative> {
        let prompt = request.to_prompt();
        tracing::debug!("Sending {} prompt chars to Claude", prompt.len());

        let request_body = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: 1024,
            system: Some(SYSTEM_PROMPT.to_string()),
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::GenerationUnavailable("Claude request timed out".to_string())
                } else {
                    Error::GenerationUnavailable(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GenerationUnavailable(format!(
                "Claude API error ({}): {}",
                status, body
            )));
        }

        let result: ClaudeResponse = response.json().await.map_err(|e| {
            Error::GenerationUnavailable(format!("Failed to parse Claude response: {}", e))
        })?;

        if let Some(error) = result.error {
            return Err(Error::GenerationUnavailable(error.message));
        }

        let text = result
            .content
            .into_iter()
            .filter(|c| c.content_type == "text")
            .filter_map(|c| c.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(Error::GenerationUnavailable(
                "Empty response from Claude".to_string(),
            ));
        }

        Ok(parse_narrative(&text))
    }

    fn name(&self) -> &str {
        "Claude"
    }
}
