// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one layer:
//
//   config.rs      — AppConfig: defaults, .env + environment
//                    variables, validation of the chunking and
//                    selection bounds
//
//   file_store.rs  — the upload directory: save, read, list and
//                    delete the raw PDF bytes
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Application settings from defaults, .env and the environment
pub mod config;

/// Upload directory for raw PDF files
pub mod file_store;
