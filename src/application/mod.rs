// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one user-facing goal each.
//
// Rules for this layer:
//   - No HTTP or clap types here (that's Layer 1)
//   - No PDF parsing or network code (Layers 4 and 5)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Upload → extract → segment → store
pub mod upload_use_case;

// Question → context selection → completion
pub mod ask_use_case;

// List, delete, preview and preload manuals
pub mod library_use_case;
