// ============================================================
// Layer 5 — Language Model Client
// ============================================================
// Talks to an OpenAI-compatible chat-completions endpoint.
//
//   prompt   → system + user messages built from a manual
//              excerpt and the user's question
//   openai   → OpenAiCompletion, the CompletionService used by
//              the ask use case
//
// Failures are reported once, never retried here.

pub mod openai;
pub mod prompt;

use serde::Serialize;

use crate::domain::error::CoreError;

/// A chat message for the LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role:    Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status}: {body}")]
    Api { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("OpenAI API key not configured")]
    NotConfigured,
}

impl From<LlmError> for CoreError {
    fn from(e: LlmError) -> Self {
        CoreError::Completion(e.to_string())
    }
}
