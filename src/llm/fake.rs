//! Deterministic provider for offline runs and tests.

use async_trait::async_trait;

use super::{LlmError, LlmProvider};

/// Answers from registered responses, matched by a case-insensitive
/// substring of the user prompt, first registration first.
#[derive(Debug, Clone)]
pub struct FakeProvider {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: Vec::new(),
            default_response: Some(
                "Go with the first recipe on the list and season it to taste.".to_string(),
            ),
        }
    }
}

impl FakeProvider {
    /// A provider with no responses: every call fails.
    pub fn failing() -> Self {
        Self {
            responses: Vec::new(),
            default_response: None,
        }
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::failing().and_response(prompt_contains, response)
    }

    pub fn and_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        let prompt = user_prompt.to_lowercase();

        self.responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| {
                LlmError::RequestFailed(format!(
                    "FakeProvider: no response configured for prompt: {}",
                    user_prompt.chars().take(100).collect::<String>()
                ))
            })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
