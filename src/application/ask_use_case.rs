// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// Answers a question about a manual in three steps:
//   1. resolve the context against the registry (read borrow only)
//   2. extract the fallback PDF, if step 1 picked one from disk
//   3. send context + question to the completion service
//
// The steps are separate so the HTTP layer can release its
// registry lock before extracting or waiting on the network.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::registry::Registry;
use crate::data::selector::{ContextSelector, Resolution, SelectedContext};
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::{CompletionService, DocumentSource};

/// A question plus the manual the user has selected, if any
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question:    String,
    #[serde(default)]
    pub manual_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub answer: String,
    /// Name of the manual the context came from
    pub source: String,
}

pub struct AskUseCase {
    selector:   ContextSelector,
    completion: Arc<dyn CompletionService>,
}

impl AskUseCase {
    pub fn new(selector: ContextSelector, completion: Arc<dyn CompletionService>) -> Self {
        Self { selector, completion }
    }

    /// Validate the request and resolve its context without extracting.
    pub fn resolve(
        &self,
        registry: &Registry,
        fallback: &dyn DocumentSource,
        request: &AskRequest,
    ) -> CoreResult<Resolution> {
        if request.question.trim().is_empty() {
            return Err(CoreError::InvalidRequest("question is empty".into()));
        }
        self.selector
            .resolve(registry, fallback, request.manual_name.as_deref())
    }

    /// Validate the request and pick the context for it.
    pub fn select(
        &self,
        registry: &Registry,
        fallback: &dyn DocumentSource,
        request: &AskRequest,
    ) -> CoreResult<SelectedContext> {
        match self.resolve(registry, fallback, request)? {
            Resolution::Ready(ctx) => Ok(ctx),
            Resolution::Stored(name) => self.selector.read_stored(fallback, &name),
        }
    }

    /// Ask the completion service about an already selected context.
    pub async fn answer(&self, question: &str, context: SelectedContext) -> CoreResult<Answer> {
        tracing::info!(
            "Asking about '{}' with {} chars of context",
            context.resolved_name,
            context.text.chars().count()
        );

        let answer = self
            .completion
            .complete(&context.text, question.trim())
            .await?;

        Ok(Answer {
            answer,
            source: context.resolved_name,
        })
    }

    /// Select and answer in one go, for callers that own the registry outright.
    pub async fn ask(
        &self,
        registry: &Registry,
        fallback: &dyn DocumentSource,
        request: &AskRequest,
    ) -> CoreResult<Answer> {
        let context = self.select(registry, fallback, request)?;
        self.answer(&request.question, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::segmenter::Segmenter;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records what it was asked and echoes the context length.
    #[derive(Default)]
    struct RecordingCompletion {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl CompletionService for RecordingCompletion {
        async fn complete(&self, context: &str, question: &str) -> CoreResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((context.to_string(), question.to_string()));
            Ok(format!("{} chars", context.chars().count()))
        }
    }

    struct NoFiles;

    impl DocumentSource for NoFiles {
        fn list_names(&self) -> CoreResult<Vec<String>> {
            Ok(Vec::new())
        }

        fn read_text(&self, name: &str) -> CoreResult<String> {
            Err(CoreError::DocumentNotFound(name.to_string()))
        }
    }

    fn request(question: &str, manual: Option<&str>) -> AskRequest {
        AskRequest {
            question:    question.to_string(),
            manual_name: manual.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_answers_from_truncated_manual() {
        let completion = Arc::new(RecordingCompletion::default());
        let uc  = AskUseCase::new(ContextSelector::new(4000).unwrap(), completion.clone());
        let mut reg = Registry::new();
        reg.insert(Segmenter::new(500, 50).unwrap().document("polo.pdf", "a".repeat(5000)));

        let answer = uc
            .ask(&reg, &NoFiles, &request("  How often to change oil? ", Some("polo.pdf")))
            .await
            .unwrap();

        assert_eq!(answer.source, "polo.pdf");
        assert_eq!(answer.answer, "4000 chars");
        let calls = completion.calls.lock().unwrap();
        assert_eq!(calls[0].1, "How often to change oil?");
    }

    #[tokio::test]
    async fn test_empty_registry_reports_no_document() {
        let uc = AskUseCase::new(
            ContextSelector::new(4000).unwrap(),
            Arc::new(RecordingCompletion::default()),
        );

        let err = uc
            .ask(&Registry::new(), &NoFiles, &request("anything?", None))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NoDocumentAvailable));
    }

    #[test]
    fn test_blank_question_is_rejected_before_resolving() {
        let uc = AskUseCase::new(
            ContextSelector::new(4000).unwrap(),
            Arc::new(RecordingCompletion::default()),
        );

        let err = uc
            .resolve(&Registry::new(), &NoFiles, &request("", Some("a.pdf")))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest(_)));
    }

    #[test]
    fn test_blank_question_is_rejected() {
        let uc = AskUseCase::new(
            ContextSelector::new(4000).unwrap(),
            Arc::new(RecordingCompletion::default()),
        );

        let err = uc
            .select(&Registry::new(), &NoFiles, &request("   ", None))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRequest(_)));
    }
}
