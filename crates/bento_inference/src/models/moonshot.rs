use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use bento_core::{CompletionModel, Error, ModelRequest, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use crate::normalize::truncate_chars;
use crate::Config;

/// How much of an upstream body is kept in error messages.
const ERROR_BODY_CHARS: usize = 200;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Kimi chat completions (api.moonshot.cn, OpenAI-compatible).
pub struct MoonshotModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl MoonshotModel {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Configuration("KIMI_API_KEY is not set".to_string()))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

impl fmt::Debug for MoonshotModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoonshotModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl CompletionModel for MoonshotModel {
    fn name(&self) -> &str {
        "Kimi"
    }

    async fn complete(&self, request: &ModelRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_content,
                },
            ],
            temperature: self.temperature,
        };

        debug!("🤖 Calling {} ({} chars of content)", self.model, request.user_content.chars().count());
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            error!("Kimi API error response ({}): {}", status, raw);
            return Err(Error::Upstream(format!(
                "Kimi API call failed ({}): {}",
                status,
                truncate_chars(&raw, ERROR_BODY_CHARS)
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&raw).map_err(|e| {
            error!("Kimi API returned non-JSON ({}): {}", e, raw);
            Error::UpstreamFormat(format!(
                "Kimi API returned non-JSON: {}",
                truncate_chars(&raw, ERROR_BODY_CHARS)
            ))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                Error::UpstreamFormat(format!(
                    "Kimi API returned no message: {}",
                    truncate_chars(&raw, ERROR_BODY_CHARS)
                ))
            })
    }
}
