// ============================================================
// Layer 4 — Context Selector
// ============================================================
// Decides which manual a question is answered from and how much
// of its text is sent to the completion service.
//
// Resolution order:
//   1. the requested name, if it is in the registry
//   2. the first name listed by the fallback DocumentSource
//      (the upload directory, sorted by name)
//   3. the first manual registered in this process
//   4. otherwise → NoDocumentAvailable
//
// The returned context is always a leading prefix of the full
// text, cut at `max_chars` characters. It does not follow chunk
// boundaries and no ranking is involved.
//
// Selection runs in two steps so the registry borrow can end
// before any PDF is extracted:
//   resolve()     → registry + directory listing only
//   read_stored() → extraction of the file resolve() picked

use crate::data::registry::Registry;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::DocumentSource;

/// Text handed to the completion service plus the manual it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedContext {
    pub text:          String,
    pub resolved_name: String,
}

/// Outcome of the registry step of selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Text came from the registry; nothing left to read
    Ready(SelectedContext),
    /// The named file has to be extracted from the fallback source
    Stored(String),
}

#[derive(Debug, Clone, Copy)]
pub struct ContextSelector {
    max_chars: usize,
}

impl ContextSelector {
    /// Fails with `Configuration` when `max_chars` is 0.
    pub fn new(max_chars: usize) -> CoreResult<Self> {
        if max_chars == 0 {
            return Err(CoreError::configuration("max context chars must be positive"));
        }
        Ok(Self { max_chars })
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Pick the manual for a question and return its truncated text.
    ///
    /// An empty or whitespace-only `requested` counts as absent.
    pub fn select(
        &self,
        registry: &Registry,
        fallback: &dyn DocumentSource,
        requested: Option<&str>,
    ) -> CoreResult<SelectedContext> {
        match self.resolve(registry, fallback, requested)? {
            Resolution::Ready(ctx) => Ok(ctx),
            Resolution::Stored(name) => self.read_stored(fallback, &name),
        }
    }

    /// Registry step of `select`. Lists the fallback source but never
    /// extracts from it.
    pub fn resolve(
        &self,
        registry: &Registry,
        fallback: &dyn DocumentSource,
        requested: Option<&str>,
    ) -> CoreResult<Resolution> {
        let requested = requested.map(str::trim).filter(|n| !n.is_empty());

        if let Some(doc) = requested.and_then(|n| registry.get(n)) {
            tracing::debug!("Context from registered manual '{}'", doc.name);
            return Ok(Resolution::Ready(self.truncate(&doc.text, &doc.name)));
        }

        if let Some(name) = fallback.list_names()?.into_iter().next() {
            if let Some(wanted) = requested {
                tracing::warn!("Manual '{}' is not loaded, falling back to '{}'", wanted, name);
            }
            // Reuse the registered text when the file was uploaded in this process
            if let Some(doc) = registry.get(&name) {
                return Ok(Resolution::Ready(self.truncate(&doc.text, &doc.name)));
            }
            return Ok(Resolution::Stored(name));
        }

        if let Some(doc) = registry.first() {
            tracing::debug!("No stored files, using first registered manual '{}'", doc.name);
            return Ok(Resolution::Ready(self.truncate(&doc.text, &doc.name)));
        }

        Err(CoreError::NoDocumentAvailable)
    }

    /// Extraction step of `select` for a `Resolution::Stored` name.
    pub fn read_stored(&self, fallback: &dyn DocumentSource, name: &str) -> CoreResult<SelectedContext> {
        let text = fallback.read_text(name)?;
        Ok(self.truncate(&text, name))
    }

    fn truncate(&self, text: &str, name: &str) -> SelectedContext {
        SelectedContext {
            text:          prefix_chars(text, self.max_chars).to_string(),
            resolved_name: name.to_string(),
        }
    }
}

/// Leading slice of `text` holding at most `max_chars` characters
pub fn prefix_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
