// ============================================================
// Layer 4 — Document Pipeline
// ============================================================
// Everything between an uploaded PDF and the text sent to the
// language model:
//
//   PDF bytes
//       │
//       ▼
//   PdfExtractor      → pulls plain text out of the PDF
//       │
//       ▼
//   Segmenter         → overlapping character windows
//       │
//       ▼
//   Registry          → name → Document, in memory
//       │
//       ▼
//   ContextSelector   → picks a manual, returns a text prefix
//
// Each module is responsible for exactly one step.

/// Reads stored PDFs (pdf-extract) and lists the upload directory
pub mod loader;

/// Splits text into overlapping chunks
pub mod segmenter;

/// In-memory name → Document map
pub mod registry;

/// Chooses and truncates the context for a question
pub mod selector;
