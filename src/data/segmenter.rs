// ============================================================
// Layer 4 — Text Segmenter
// ============================================================
// Splits a document's text into overlapping windows of
// characters.
//
// Example with window_size=5, overlap=2 (stride = 3):
//   Text:     "ABCDEFGHIJ"
//   Chunk 0:  "ABCDE"   (start 0)
//   Chunk 1:  "DEFGH"   (start 3)
//   Chunk 2:  "GHIJ"    (start 6, reaches the end → stop)
//
// The offset advances by stride = window_size - overlap. Once a
// chunk reaches the end of the text no further chunk starts, so
// a chunk never lies entirely inside its predecessor's overlap.
// Every chunk but the last is exactly window_size long, and a
// text of L > overlap characters yields
// ceil((L - overlap) / stride) chunks (one chunk when L <= overlap).
//
// Windows are measured in chars, never bytes: a boundary never
// lands inside a multi-byte UTF-8 sequence.
//
// Reference: Rust Book §8 (Strings), §9 (Recoverable Errors)

use crate::domain::document::{Chunk, Document};
use crate::domain::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    /// Maximum number of characters per chunk
    window_size: usize,
    /// Number of characters shared between adjacent chunks
    overlap: usize,
}

impl Segmenter {
    /// Create a new Segmenter.
    ///
    /// Fails with `Configuration` when `window_size` is 0 or when
    /// `overlap >= window_size` (the stride would be 0 or negative).
    pub fn new(window_size: usize, overlap: usize) -> CoreResult<Self> {
        if window_size == 0 {
            return Err(CoreError::configuration("window size must be positive"));
        }
        if overlap >= window_size {
            return Err(CoreError::configuration(format!(
                "overlap ({overlap}) must be less than window size ({window_size})"
            )));
        }
        Ok(Self { window_size, overlap })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Characters the window advances between chunks
    pub fn stride(&self) -> usize {
        self.window_size - self.overlap
    }

    /// Split text into overlapping chunks, left to right.
    pub fn segment(&self, text: &str) -> Vec<Chunk> {
        // Byte offset of every char, plus text.len() as the final
        // boundary, so char positions map straight onto slice indices.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = bounds.len() - 1;

        let mut chunks = Vec::with_capacity(self.num_chunks(char_len));
        let mut start  = 0usize;

        while start < char_len {
            let end = (start + self.window_size).min(char_len);
            chunks.push(Chunk {
                index: chunks.len(),
                start,
                text:  text[bounds[start]..bounds[end]].to_string(),
            });

            // This window already covers the tail of the text
            if end == char_len {
                break;
            }

            start += self.stride();
        }

        chunks
    }

    /// Segment `text` and wrap it as a named Document.
    ///
    /// Example:
    ///   let doc = segmenter.document("manual.pdf", text);
    pub fn document(&self, name: impl Into<String>, text: impl Into<String>) -> Document {
        let text   = text.into();
        let chunks = self.segment(&text);
        Document::new(name, text, chunks)
    }

    /// How many chunks a text of `char_len` characters produces
    pub fn num_chunks(&self, char_len: usize) -> usize {
        match char_len {
            0 => 0,
            n if n <= self.overlap => 1,
            n => (n - self.overlap).div_ceil(self.stride()),
        }
    }
}

/// Segment `text` with the given window and overlap, returning only
/// the chunk strings.
pub fn segment(text: &str, window_size: usize, overlap: usize) -> CoreResult<Vec<String>> {
    let segmenter = Segmenter::new(window_size, overlap)?;
    Ok(segmenter
        .segment(text)
        .into_iter()
        .map(|c| c.text)
        .collect())
}

/// Rebuild the original text from chunks by dropping the overlapping
/// prefix of every chunk after the first.
pub fn reassemble(chunks: &[Chunk]) -> String {
    let mut out  = String::new();
    let mut upto = 0usize;

    for chunk in chunks {
        let skip = upto.saturating_sub(chunk.start);
        out.extend(chunk.text.chars().skip(skip));
        upto = upto.max(chunk.end());
    }

    out
}
