use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use wakecoach_domain::motivation::MotivationProvider;
use wakecoach_domain::shared::DomainError;

use crate::config::timeouts::MOTIVATION_REQUEST_TIMEOUT;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Motivational-text provider backed by an OpenAI-compatible chat-completions
/// endpoint.
///
/// Best-effort: one attempt per call, bounded by
/// [`MOTIVATION_REQUEST_TIMEOUT`], no retries. Callers substitute
/// [`wakecoach_domain::motivation::FALLBACK_MESSAGE`] on any error.
pub struct ChatCompletionMotivationClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl ChatCompletionMotivationClient {
    pub fn new(endpoint: &str, api_key: String, model: String) -> Result<Self> {
        let endpoint = Url::parse(endpoint).context("Invalid motivation API endpoint")?;

        let client = Client::builder()
            .timeout(MOTIVATION_REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model,
        })
    }

    fn build_prompt(streak_count: u32, wake_time_label: &str) -> String {
        format!(
            "You are a friendly wake-up coach. The user woke up at {wake_time_label} and is \
             currently on a {streak_count}-day streak.\n\n\
             Give a short, uplifting motivational message based on that. Avoid repeating \
             phrases. Always be encouraging and fresh."
        )
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl MotivationProvider for ChatCompletionMotivationClient {
    async fn motivation_message(
        &self,
        streak_count: u32,
        wake_time_label: &str,
    ) -> Result<String, DomainError> {
        let prompt = Self::build_prompt(streak_count, wake_time_label);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatRequestMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.8,
        };

        debug!(
            "[motivation] requesting message streak={} wake_time={}",
            streak_count, wake_time_label
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Infrastructure(format!("Motivation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Infrastructure(format!(
                "Motivation API returned {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            DomainError::Serialization(format!("Failed to parse motivation response: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                DomainError::Infrastructure("Motivation API returned no message".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_streak_and_time() {
        let prompt = ChatCompletionMotivationClient::build_prompt(5, "06:45");
        assert!(prompt.contains("06:45"));
        assert!(prompt.contains("5-day streak"));
    }

    #[test]
    fn test_parse_chat_response() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":" Rise on! "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, " Rise on! ");
    }

    #[test]
    fn test_parse_empty_choices() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        assert!(
            ChatCompletionMotivationClient::new("not a url", "key".into(), "model".into()).is_err()
        );
    }
}
