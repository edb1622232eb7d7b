// ============================================================
// Layer 2 — Library Use Case
// ============================================================
// Everything that manages the set of manuals rather than a
// single question: listing, deleting, previewing, and loading
// stored PDFs back into a registry.

use std::collections::BTreeSet;

use crate::data::loader::PdfLoader;
use crate::data::registry::Registry;
use crate::data::segmenter::Segmenter;
use crate::data::selector::prefix_chars;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::DocumentSource;
use crate::infra::file_store::FileStore;

/// Characters shown by the manual preview
pub const PREVIEW_CHARS: usize = 1000;

pub struct LibraryUseCase {
    store:     FileStore,
    loader:    PdfLoader,
    segmenter: Segmenter,
}

impl LibraryUseCase {
    pub fn new(store: FileStore, loader: PdfLoader, segmenter: Segmenter) -> Self {
        Self { store, loader, segmenter }
    }

    /// Sorted names known to the registry or stored on disk.
    pub fn list(&self, registry: &Registry) -> CoreResult<Vec<String>> {
        let mut names: BTreeSet<String> = self.store.list()?.into_iter().collect();
        names.extend(registry.names().map(str::to_string));
        Ok(names.into_iter().collect())
    }

    /// Remove a manual from the registry and from disk.
    pub fn delete(&self, registry: &mut Registry, name: &str) -> CoreResult<()> {
        let in_registry = registry.remove(name).is_some();
        let on_disk     = match self.store.remove(name) {
            Ok(removed) => removed,
            // A name the store refuses can still have been registered
            Err(CoreError::DocumentNotFound(_) | CoreError::InvalidRequest(_)) => false,
            Err(e) => return Err(e),
        };

        if !in_registry && !on_disk {
            return Err(CoreError::DocumentNotFound(name.to_string()));
        }

        tracing::info!("Deleted manual '{}'", name);
        Ok(())
    }

    /// Leading text of a registered manual; None when it is not registered.
    pub fn preview_registered(&self, registry: &Registry, name: &str, max_chars: usize) -> Option<String> {
        registry
            .get(name)
            .map(|doc| prefix_chars(&doc.text, max_chars).to_string())
    }

    /// Leading text of a stored manual, extracted from disk.
    ///
    /// Blocking: callers on an async runtime run this off the worker.
    pub fn preview_stored(&self, name: &str, max_chars: usize) -> CoreResult<String> {
        let text = self.loader.read_text(name)?;
        Ok(prefix_chars(&text, max_chars).to_string())
    }

    /// Leading text of one manual, registry first, then disk.
    pub fn preview(&self, registry: &Registry, name: &str, max_chars: usize) -> CoreResult<String> {
        match self.preview_registered(registry, name, max_chars) {
            Some(text) => Ok(text),
            None => self.preview_stored(name, max_chars),
        }
    }

    /// Extract one stored manual and register it.
    pub fn load(&self, registry: &mut Registry, name: &str) -> CoreResult<()> {
        let text = self.loader.read_text(name)?;
        registry.insert(self.segmenter.document(name, text));
        Ok(())
    }

    /// Register every stored manual that extracts cleanly.
    pub fn preload(&self, registry: &mut Registry) -> CoreResult<usize> {
        let docs  = self.loader.load_all(&self.segmenter)?;
        let count = docs.len();
        for doc in docs {
            registry.insert(doc);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::TextExtractor;
    use std::sync::Arc;

    struct Utf8Extractor;

    impl TextExtractor for Utf8Extractor {
        fn extract(&self, name: &str, bytes: &[u8]) -> CoreResult<String> {
            String::from_utf8(bytes.to_vec()).map_err(|e| CoreError::extraction(name, e))
        }
    }

    fn library(files: &[(&str, &str)]) -> (tempfile::TempDir, LibraryUseCase) {
        let tmp   = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        for (name, text) in files {
            store.save(name, text.as_bytes()).unwrap();
        }
        let loader = PdfLoader::new(store.clone(), Arc::new(Utf8Extractor));
        let lib    = LibraryUseCase::new(store, loader, Segmenter::new(10, 2).unwrap());
        (tmp, lib)
    }

    #[test]
    fn test_list_merges_disk_and_registry() {
        let (_tmp, lib) = library(&[("b.pdf", "bee")]);
        let mut reg = Registry::new();
        reg.insert(Segmenter::new(10, 2).unwrap().document("a.pdf", "ay"));
        reg.insert(Segmenter::new(10, 2).unwrap().document("b.pdf", "bee"));

        assert_eq!(lib.list(&reg).unwrap(), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_delete_removes_everywhere() {
        let (tmp, lib) = library(&[("a.pdf", "ay")]);
        let mut reg = Registry::new();
        lib.load(&mut reg, "a.pdf").unwrap();

        lib.delete(&mut reg, "a.pdf").unwrap();

        assert!(reg.is_empty());
        assert!(!tmp.path().join("a.pdf").exists());
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let (_tmp, lib) = library(&[]);
        let err = lib.delete(&mut Registry::new(), "ghost.pdf").unwrap_err();
        assert!(matches!(err, CoreError::DocumentNotFound(_)));
    }

    #[test]
    fn test_preview_truncates_stored_manual() {
        let (_tmp, lib) = library(&[("a.pdf", "0123456789abcdef")]);
        let preview = lib.preview(&Registry::new(), "a.pdf", 10).unwrap();
        assert_eq!(preview, "0123456789");
    }

    #[test]
    fn test_preview_registered_skips_disk() {
        let (_tmp, lib) = library(&[]);
        let mut reg = Registry::new();
        reg.insert(Segmenter::new(10, 2).unwrap().document("a.pdf", "registered only"));

        assert_eq!(lib.preview_registered(&reg, "a.pdf", 10).as_deref(), Some("registered"));
        assert_eq!(lib.preview_registered(&reg, "b.pdf", 10), None);
        assert!(matches!(
            lib.preview(&reg, "b.pdf", 10),
            Err(CoreError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn test_preload_registers_everything() {
        let (_tmp, lib) = library(&[("a.pdf", "first manual"), ("b.pdf", "second manual")]);
        let mut reg = Registry::new();

        assert_eq!(lib.preload(&mut reg).unwrap(), 2);
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["a.pdf", "b.pdf"]);
        assert!(!reg.get("a.pdf").unwrap().chunks.is_empty());
    }
}
