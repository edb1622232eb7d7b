// ============================================================
// Layer 4 — Document Registry
// ============================================================
// In-memory map from manual name to its segmented Document.
//
// The registry is a plain value: it has no interior locking
// and no persistence. The host (AppState in the HTTP layer, or
// a local variable in the CLI) owns one instance for the life
// of the process and decides how access is serialised. It
// starts empty; nothing survives a restart.
//
// Names are remembered in insertion order so "the first
// registered manual" is well defined. Re-inserting an existing
// name replaces the document (last writer wins) and keeps its
// original position.

use std::collections::HashMap;

use crate::domain::document::Document;

#[derive(Debug, Default)]
pub struct Registry {
    documents: HashMap<String, Document>,
    order:     Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document, returning the one it replaced, if any.
    pub fn insert(&mut self, doc: Document) -> Option<Document> {
        let name = doc.name.clone();
        let previous = self.documents.insert(name.clone(), doc);
        if previous.is_none() {
            self.order.push(name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Document> {
        let removed = self.documents.remove(name)?;
        self.order.retain(|n| n != name);
        Some(removed)
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The earliest registered document still present
    pub fn first(&self) -> Option<&Document> {
        self.order.first().and_then(|n| self.documents.get(n))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::segmenter::Segmenter;

    fn doc(name: &str, text: &str) -> Document {
        Segmenter::new(10, 2).unwrap().document(name, text)
    }

    #[test]
    fn test_starts_empty() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert!(reg.first().is_none());
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let mut reg = Registry::new();
        reg.insert(doc("b.pdf", "bee"));
        reg.insert(doc("a.pdf", "ay"));
        reg.insert(doc("c.pdf", "see"));

        let names: Vec<&str> = reg.names().collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(reg.first().unwrap().name, "b.pdf");
    }

    #[test]
    fn test_reinsert_replaces_and_keeps_position() {
        let mut reg = Registry::new();
        reg.insert(doc("a.pdf", "old text"));
        reg.insert(doc("b.pdf", "other"));

        let previous = reg.insert(doc("a.pdf", "new text"));

        assert_eq!(previous.unwrap().text, "old text");
        assert_eq!(reg.get("a.pdf").unwrap().text, "new text");
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.names().next(), Some("a.pdf"));
    }

    #[test]
    fn test_remove_drops_name() {
        let mut reg = Registry::new();
        reg.insert(doc("a.pdf", "x"));
        reg.insert(doc("b.pdf", "y"));

        assert!(reg.remove("a.pdf").is_some());
        assert!(reg.remove("a.pdf").is_none());
        assert!(!reg.contains("a.pdf"));
        assert_eq!(reg.first().unwrap().name, "b.pdf");
    }
}
