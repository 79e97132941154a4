//! Language-model providers for the recipe recommendation.

mod fake;
mod zai;

pub use fake::FakeProvider;
pub use zai::ZaiProvider;

use async_trait::async_trait;
use std::{fmt, sync::Arc};
use thiserror::Error;

use crate::config::LlmConfig;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A chat model that answers one system + user message pair.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError>;

    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}

/// Build the provider named by `llm.provider`.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match config.provider.as_str() {
        "zai" => Ok(Arc::new(ZaiProvider::new(config))),
        "fake" => Ok(Arc::new(FakeProvider::default())),
        other => Err(LlmError::NotConfigured(format!("Unknown provider: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_is_chosen_by_name() {
        let mut config = LlmConfig::default();
        assert_eq!(create_provider(&config).unwrap().provider_name(), "zai");

        config.provider = "fake".to_string();
        assert_eq!(create_provider(&config).unwrap().provider_name(), "fake");

        config.provider = "openai".to_string();
        assert!(create_provider(&config).is_err());
    }
}
