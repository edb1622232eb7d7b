// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Turns stored PDF manuals into text using the pdf-extract
// crate.
//
// Two pieces live here:
//   PdfExtractor → TextExtractor over raw PDF bytes
//   PdfLoader    → DocumentSource over the upload directory:
//                  lists the stored manuals (sorted by name) and
//                  extracts the text of one on demand
//
// PDFs without a text layer (scanned pages) extract to an
// empty string; that is reported as an extraction failure
// rather than registering a blank manual.
//
// Reference: pdf-extract crate documentation
//            Rust Book §9 (Error Handling)

use std::sync::Arc;

use crate::data::segmenter::Segmenter;
use crate::domain::document::Document;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::{DocumentSource, TextExtractor};
use crate::infra::file_store::FileStore;

// ─── PdfExtractor ─────────────────────────────────────────────────────────────
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, name: &str, bytes: &[u8]) -> CoreResult<String> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| CoreError::extraction(name, e))?;

        if text.trim().is_empty() {
            return Err(CoreError::extraction(
                name,
                "no extractable text (scanned or image-only PDF?)",
            ));
        }

        tracing::debug!("Extracted {} chars from '{}'", text.chars().count(), name);
        Ok(text)
    }
}

// ─── PdfLoader ────────────────────────────────────────────────────────────────
/// Reads manuals back out of the upload directory.
#[derive(Clone)]
pub struct PdfLoader {
    store:     FileStore,
    extractor: Arc<dyn TextExtractor>,
}

impl PdfLoader {
    pub fn new(store: FileStore, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { store, extractor }
    }

    /// Extract and segment every stored manual.
    ///
    /// A manual that fails to extract is logged and skipped so one
    /// bad file does not block the others.
    pub fn load_all(&self, segmenter: &Segmenter) -> CoreResult<Vec<Document>> {
        let mut docs = Vec::new();

        for name in self.store.list()? {
            match self.read_text(&name) {
                Ok(text) => {
                    let doc = segmenter.document(name, text);
                    tracing::debug!(
                        "Loaded: {} ({} chars, {} chunks)",
                        doc.name,
                        doc.char_len(),
                        doc.chunks.len()
                    );
                    docs.push(doc);
                }
                Err(e) => tracing::warn!("Skipping '{}': {}", name, e),
            }
        }

        tracing::info!("Loaded {} manuals from '{}'", docs.len(), self.store.dir().display());
        Ok(docs)
    }
}

impl DocumentSource for PdfLoader {
    fn list_names(&self) -> CoreResult<Vec<String>> {
        self.store.list()
    }

    fn read_text(&self, name: &str) -> CoreResult<String> {
        let bytes = self.store.read(name)?;
        self.extractor.extract(name, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Treats the stored bytes as UTF-8 text; "bad" files fail.
    struct Utf8Extractor;

    impl TextExtractor for Utf8Extractor {
        fn extract(&self, name: &str, bytes: &[u8]) -> CoreResult<String> {
            if name.starts_with("bad") {
                return Err(CoreError::extraction(name, "corrupt"));
            }
            String::from_utf8(bytes.to_vec()).map_err(|e| CoreError::extraction(name, e))
        }
    }

    fn loader_with(files: &[(&str, &str)]) -> (tempfile::TempDir, PdfLoader) {
        let tmp   = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        for (name, text) in files {
            store.save(name, text.as_bytes()).unwrap();
        }
        (tmp, PdfLoader::new(store, Arc::new(Utf8Extractor)))
    }

    #[test]
    fn test_lists_sorted_names() {
        let (_tmp, loader) = loader_with(&[("b.pdf", "2"), ("a.pdf", "1")]);
        assert_eq!(loader.list_names().unwrap(), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_read_text_goes_through_extractor() {
        let (_tmp, loader) = loader_with(&[("a.pdf", "oil every 10000 km")]);
        assert_eq!(loader.read_text("a.pdf").unwrap(), "oil every 10000 km");
    }

    #[test]
    fn test_load_all_skips_bad_files() {
        let (_tmp, loader) = loader_with(&[("bad.pdf", "x"), ("good.pdf", "tyres 2.2 bar")]);
        let seg  = Segmenter::new(5, 1).unwrap();
        let docs = loader.load_all(&seg).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "good.pdf");
        assert_eq!(docs[0].chunks.len(), seg.num_chunks(13));
    }

    #[test]
    fn test_pdf_extractor_rejects_garbage() {
        let err = PdfExtractor.extract("junk.pdf", b"definitely not a pdf").unwrap_err();
        match err {
            CoreError::Extraction { name, .. } => assert_eq!(name, "junk.pdf"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
