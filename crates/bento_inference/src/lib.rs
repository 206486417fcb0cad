use std::fmt;

pub mod models;
pub mod normalize;
pub mod prompt;
pub mod repair;
pub mod retry;

pub use models::create_model;
pub use retry::{retry_with_backoff, RetryPolicy};

pub const DEFAULT_BASE_URL: &str = "https://api.moonshot.cn/v1";
pub const DEFAULT_MODEL: &str = "moonshot-v1-8k";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    /// Provider: `kimi` (default) or `dummy`
    pub model_name: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            retry: RetryPolicy::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Config {
    /// Reads `KIMI_API_KEY`, `BENTO_MODEL`, `KIMI_BASE_URL` and `KIMI_MODEL`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: var("KIMI_API_KEY"),
            model_name: var("BENTO_MODEL"),
            base_url: var("KIMI_BASE_URL").unwrap_or(defaults.base_url),
            model: var("KIMI_MODEL").unwrap_or(defaults.model),
            ..defaults
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::repair::{finalize, parse_reply, Provenance};
    pub use super::retry::{retry_with_backoff, RetryPolicy};
    pub use bento_core::{BentoResult, CompletionModel, Error, ModelRequest, Result};
}
