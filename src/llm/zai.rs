//! OpenAI-style chat completions endpoint of the ZAI API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{LlmError, LlmProvider};
use crate::config::LlmConfig;

#[derive(Debug)]
pub struct ZaiProvider {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

impl ZaiProvider {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, empty when there is none.
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for ZaiProvider {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::NotConfigured(
                "ZAI API key is not configured".to_string(),
            ));
        }

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::ParseError(e.to_string()))?;

        Ok(response.into_text())
    }

    fn provider_name(&self) -> &'static str {
        "zai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_matches_chat_completion_shape() {
        let request = ChatRequest {
            model: "zai-ai",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "be a chef",
                },
                ChatMessage {
                    role: "user",
                    content: "rice?",
                },
            ],
            max_tokens: 200,
            temperature: 0.5,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "zai-ai",
                "messages": [
                    {"role": "system", "content": "be a chef"},
                    {"role": "user", "content": "rice?"}
                ],
                "max_tokens": 200,
                "temperature": 0.5
            })
        );
    }

    #[test]
    fn first_choice_content_or_empty() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Make the soup."}},{"message":{"content":"no"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text(), "Make the soup.");

        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(response.into_text(), "");

        let response: ChatResponse = serde_json::from_str(r#"{"choices":[{}]}"#).unwrap();
        assert_eq!(response.into_text(), "");
    }

    #[tokio::test]
    async fn empty_key_is_not_configured() {
        let provider = ZaiProvider::new(&LlmConfig::default());
        assert!(matches!(
            provider.complete("system", "user").await,
            Err(LlmError::NotConfigured(_))
        ));
    }
}
