// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The core never touches PDFs, directories or HTTP clients
// directly. It talks to three collaborators through traits:
//
//   TextExtractor     → bytes of an uploaded file → plain text
//                       (PdfExtractor in data/loader.rs)
//   DocumentSource    → "list document names" and "read text
//                       for a name" over the upload directory
//                       (PdfLoader in data/loader.rs)
//   CompletionService → context + question → answer
//                       (OpenAiCompletion in llm/openai.rs)
//
// Tests plug in-memory fakes into the same seams.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use async_trait::async_trait;

use crate::domain::error::CoreResult;

// ─── TextExtractor ────────────────────────────────────────────────────────────
/// Turns the raw bytes of an uploaded file into text.
pub trait TextExtractor: Send + Sync {
    /// `name` is only used for error provenance.
    fn extract(&self, name: &str, bytes: &[u8]) -> CoreResult<String>;
}

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Enumerates stored documents and reads their text.
///
/// The order of `list_names` decides which document the context
/// selector falls back to, so implementations must return a stable
/// order.
pub trait DocumentSource: Send + Sync {
    fn list_names(&self) -> CoreResult<Vec<String>>;

    /// Fails with `DocumentNotFound` for an unknown name and with
    /// `Extraction` when the stored file cannot be read as text.
    fn read_text(&self, name: &str) -> CoreResult<String>;
}

// ─── CompletionService ────────────────────────────────────────────────────────
/// Answers a question given a text excerpt.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, context: &str, question: &str) -> CoreResult<String>;

    /// False when the service cannot be called at all (e.g. no API key)
    fn is_configured(&self) -> bool {
        true
    }
}
