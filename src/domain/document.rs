// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// A Document is one uploaded manual: its name (the original
// file name), the full extracted text, and the ordered list of
// overlapping chunks produced by the data layer's Segmenter.
//
// A Document is only ever built from text that was extracted
// successfully, so there is no "half loaded" state. Chunks are
// derived from the text; a new upload under the same name
// builds a fresh Document rather than patching the old chunks.
//
// Reference: Rust Book §5 (Structs and Methods)

/// A contiguous slice of a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk in the document, starting at 0
    pub index: usize,

    /// Offset of the first character, counted in chars (not bytes)
    pub start: usize,

    /// The chunk text itself
    pub text: String,
}

impl Chunk {
    /// Number of characters in this chunk
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }
}

/// An uploaded manual held in the registry.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique name, normally the uploaded file name ("corolla_2019.pdf")
    pub name: String,

    /// Full extracted text
    pub text: String,

    /// Overlapping windows over `text`, left to right
    pub chunks: Vec<Chunk>,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>, chunks: Vec<Chunk>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            chunks,
        }
    }

    /// Length of the full text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(index: usize, start: usize, text: &str) -> Chunk {
        Chunk { index, start, text: text.to_string() }
    }

    #[test]
    fn test_chunk_end_counts_chars() {
        let c = chunk(1, 3, "ñandú");
        assert_eq!(c.char_len(), 5);
        assert_eq!(c.end(), 8);
    }

    #[test]
    fn test_char_len_ignores_byte_width() {
        let doc = Document::new("a.pdf", "Öl prüfen", vec![chunk(0, 0, "Öl prüfen")]);
        assert_eq!(doc.name, "a.pdf");
        assert_eq!(doc.char_len(), 9);
        assert_eq!(doc.chunks.len(), 1);
    }
}
