use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::error::CoreResult;
use crate::domain::traits::CompletionService;
use crate::infra::config::AppConfig;
use crate::llm::{prompt, LlmError, Message};

pub struct OpenAiCompletion {
    client:      reqwest::Client,
    api_key:     Option<String>,
    model:       String,
    base_url:    String,
    temperature: f32,
    max_tokens:  u32,
}

impl OpenAiCompletion {
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url,
            temperature: 0.2,
            max_tokens: 800,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
            ..Self::new(
                cfg.openai_api_key.clone(),
                cfg.openai_model.clone(),
                cfg.openai_base_url.clone(),
            )
        }
    }

    async fn chat(&self, messages: Vec<Message>) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let url     = format!("{}/v1/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        debug!("OpenAI request to {} (model={})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        parse_answer(&resp)
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletion {
    async fn complete(&self, context: &str, question: &str) -> CoreResult<String> {
        let answer = self.chat(prompt::build_messages(context, question)).await?;
        Ok(answer)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_answer(resp: &serde_json::Value) -> Result<String, LlmError> {
    resp["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| LlmError::Parse("missing choices[0].message.content".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CoreError;

    #[test]
    fn test_parse_answer_reads_first_choice() {
        let resp = json!({
            "choices": [{ "message": { "role": "assistant", "content": "  Use 5W-30 oil.\n" } }]
        });
        assert_eq!(parse_answer(&resp).unwrap(), "Use 5W-30 oil.");
    }

    #[test]
    fn test_parse_answer_missing_content() {
        let resp = json!({ "choices": [] });
        assert!(matches!(parse_answer(&resp), Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let llm = OpenAiCompletion::new(None, "gpt-4o-mini".into(), "http://127.0.0.1:9".into());
        assert!(!llm.is_configured());

        let err = llm.complete("ctx", "q").await.unwrap_err();
        match err {
            CoreError::Completion(msg) => assert!(msg.contains("not configured")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
