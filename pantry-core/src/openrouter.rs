//! OpenRouter API client
//!
//! Typed request/response structs for the OpenRouter chat completions
//! endpoint plus the one call this application makes against it.

use crate::http::get_client;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Request payload for the chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request for the given model and messages
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature for sampling
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the maximum number of tokens in the response
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

/// A message in the chat conversation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// Content of the first choice, or an error if the service sent none
    pub fn content_or_err(&self) -> Result<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .context("No response content from API (empty choices)")
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

/// Send a chat completion request to the OpenRouter API
///
/// One shot: non-2xx statuses and unreadable bodies come back as errors,
/// no retries.
pub async fn chat_completion(request: &ChatRequest, api_key: &str) -> Result<ChatResponse> {
    let client = get_client();

    let response = client
        .post(COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
        .context("Failed to send request to OpenRouter API")?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        anyhow::bail!("OpenRouter API error {}: {}", status, text);
    }

    response
        .json()
        .await
        .context("Failed to parse OpenRouter API response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("test-model", vec![Message::user("Hello")])
            .temperature(0.8)
            .max_tokens(1500);

        assert_eq!(request.model, "test-model");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.8));
        assert_eq!(request.max_tokens, Some(1500));
    }

    #[test]
    fn test_message_constructors() {
        let system = Message::system("You are a chef");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "You are a chef");

        let user = Message::user("chicken, rice");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_unset_sampling_params_are_not_serialized() {
        let request = ChatRequest::new("test-model", vec![Message::user("hi")]);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_content_accessor() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "two recipes"}, "finish_reason": "stop"}]}"#,
        )
        .unwrap();
        assert_eq!(response.content_or_err().unwrap(), "two recipes");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(empty.content_or_err().is_err());
    }
}
