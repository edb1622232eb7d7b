// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits that define what the system
// works with: documents, their chunks, the errors the core can
// raise and the collaborators it talks to.
//
// Rules for this layer:
//   - NO axum / reqwest / pdf-extract types here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// An uploaded manual together with its chunks
pub mod document;

// The error taxonomy shared by every layer below the CLI
pub mod error;

// Collaborator abstractions (extractor, storage, completion)
pub mod traits;
