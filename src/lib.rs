//! Car manual question answering: upload PDF manuals, segment their
//! text into overlapping windows, and answer questions by sending a
//! bounded excerpt to an LLM.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod http;
pub mod infra;
pub mod llm;

pub use data::segmenter::{segment, Segmenter};
pub use data::selector::{ContextSelector, SelectedContext};
pub use domain::error::{CoreError, CoreResult};
