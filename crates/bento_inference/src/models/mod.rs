use std::sync::Arc;
use bento_core::{CompletionModel, Error, Result};
use crate::Config;

pub mod dummy;
pub mod moonshot;

pub use dummy::DummyModel;
pub use moonshot::MoonshotModel;

pub const DEFAULT_PROVIDER: &str = "kimi";

/// Builds the completion model named by `config.model_name`.
pub fn create_model(config: &Config) -> Result<Arc<dyn CompletionModel>> {
    match config.model_name.as_deref().unwrap_or(DEFAULT_PROVIDER) {
        "kimi" | "moonshot" => Ok(Arc::new(MoonshotModel::new(config)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Configuration(format!(
            "Unknown model: {}. Available models: kimi (default), dummy",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model() {
        let config = Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        assert_eq!(create_model(&config).unwrap().name(), "Kimi");

        let config = Config {
            model_name: Some("dummy".to_string()),
            ..Config::default()
        };
        assert_eq!(create_model(&config).unwrap().name(), "Dummy");
    }

    #[test]
    fn test_kimi_requires_api_key() {
        let err = create_model(&Config::default()).err().unwrap();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_unknown_model() {
        let config = Config {
            model_name: Some("gpt-2".to_string()),
            ..Config::default()
        };
        assert!(matches!(create_model(&config), Err(Error::Configuration(_))));
    }
}
