// ============================================================
// Layer 2 — Upload Use Case
// ============================================================
// Turns an uploaded file into a registered manual:
//
//   Step 1: Validate the file name          (Layer 6 - infra)
//   Step 2: Extract text from the PDF bytes (Layer 4 - data)
//   Step 3: Segment the text into chunks    (Layer 4 - data)
//   Step 4: Store the bytes on disk         (Layer 6 - infra)
//
// Extraction runs before anything is written, so a file that
// cannot be read leaves no trace on disk or in the registry.
// Inserting the returned Document into the registry is left to
// the caller, which owns the registry lock.

use std::sync::Arc;

use crate::data::segmenter::Segmenter;
use crate::domain::document::Document;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::TextExtractor;
use crate::infra::file_store::FileStore;

pub struct UploadUseCase {
    store:     FileStore,
    extractor: Arc<dyn TextExtractor>,
    segmenter: Segmenter,
}

impl UploadUseCase {
    pub fn new(store: FileStore, extractor: Arc<dyn TextExtractor>, segmenter: Segmenter) -> Self {
        Self { store, extractor, segmenter }
    }

    /// Run the upload pipeline and return the segmented manual.
    pub fn ingest(&self, raw_name: &str, bytes: &[u8]) -> CoreResult<Document> {
        // ── Step 1: Validate ──────────────────────────────────────────────────
        let name = FileStore::sanitize_name(raw_name)?;
        if bytes.is_empty() {
            return Err(CoreError::InvalidRequest(format!("'{name}' is empty")));
        }

        // ── Step 2: Extract ───────────────────────────────────────────────────
        let text = self.extractor.extract(&name, bytes)?;

        // ── Step 3: Segment ───────────────────────────────────────────────────
        let doc = self.segmenter.document(name, text);

        // ── Step 4: Store ─────────────────────────────────────────────────────
        self.store.save(&doc.name, bytes)?;

        tracing::info!(
            "Ingested '{}': {} chars, {} chunks",
            doc.name,
            doc.char_len(),
            doc.chunks.len()
        );
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Utf8Extractor;

    impl TextExtractor for Utf8Extractor {
        fn extract(&self, name: &str, bytes: &[u8]) -> CoreResult<String> {
            let text = std::str::from_utf8(bytes).map_err(|e| CoreError::extraction(name, e))?;
            if text.starts_with("%SCAN") {
                return Err(CoreError::extraction(name, "no text layer"));
            }
            Ok(text.to_string())
        }
    }

    fn use_case(dir: &std::path::Path) -> UploadUseCase {
        UploadUseCase::new(
            FileStore::new(dir),
            Arc::new(Utf8Extractor),
            Segmenter::new(10, 2).unwrap(),
        )
    }

    #[test]
    fn test_ingest_stores_and_segments() {
        let tmp = tempfile::tempdir().unwrap();
        let uc  = use_case(tmp.path());

        let doc = uc.ingest("uploads/golf.pdf", b"Check the oil level weekly.").unwrap();

        assert_eq!(doc.name, "golf.pdf");
        assert_eq!(doc.chunks.len(), Segmenter::new(10, 2).unwrap().num_chunks(27));
        assert!(tmp.path().join("golf.pdf").exists());
    }

    #[test]
    fn test_extraction_failure_stores_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let uc  = use_case(tmp.path());

        let err = uc.ingest("scan.pdf", b"%SCAN image only").unwrap_err();

        assert!(matches!(err, CoreError::Extraction { .. }));
        assert!(!tmp.path().join("scan.pdf").exists());
    }

    #[test]
    fn test_rejects_non_pdf_and_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let uc  = use_case(tmp.path());

        assert!(matches!(
            uc.ingest("notes.txt", b"text"),
            Err(CoreError::InvalidRequest(_))
        ));
        assert!(matches!(
            uc.ingest("empty.pdf", b""),
            Err(CoreError::InvalidRequest(_))
        ));
    }
}
