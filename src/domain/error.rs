// ============================================================
// Layer 3 — Core Errors
// ============================================================
// Every failure the core can report. Library layers return
// Result<_, CoreError>; the CLI wraps these in anyhow and the
// HTTP layer turns them into status codes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid window/overlap/max-chars parameters
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A question arrived but there is nothing to answer from
    #[error("no manual available, please upload a document first")]
    NoDocumentAvailable,

    #[error("manual not found: {0}")]
    DocumentNotFound(String),

    /// The extractor could not turn the file into text
    #[error("failed to extract text from '{name}': {reason}")]
    Extraction { name: String, reason: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("completion failed: {0}")]
    Completion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn extraction(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Extraction {
            name:   name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
