// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `serve`, `segment` and `ask`.
//
// Flags left unset fall back to the environment / .env values
// loaded into AppConfig; flags that are given win.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::infra::config::AppConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API used by the web frontend
    Serve(ServeArgs),

    /// Segment a PDF or text file and print the chunk layout
    Segment(SegmentArgs),

    /// Ask one question about a stored manual
    Ask(AskArgs),
}

/// Chunking flags shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct ChunkingArgs {
    /// Characters per chunk
    #[arg(long)]
    pub window_size: Option<usize>,

    /// Characters shared between adjacent chunks (must be < window size)
    #[arg(long)]
    pub overlap: Option<usize>,
}

impl ChunkingArgs {
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(v) = self.window_size {
            cfg.window_size = v;
        }
        if let Some(v) = self.overlap {
            cfg.overlap = v;
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory where uploaded PDFs are stored
    #[arg(long)]
    pub docs_dir: Option<String>,

    /// Address to listen on, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub bind: Option<String>,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Characters of manual text sent with each question
    #[arg(long)]
    pub max_context_chars: Option<usize>,

    /// Extract every PDF already in the docs directory at startup
    #[arg(long)]
    pub preload: bool,
}

impl ServeArgs {
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(v) = &self.docs_dir {
            cfg.docs_dir = v.clone();
        }
        if let Some(v) = &self.bind {
            cfg.bind_addr = v.clone();
        }
        if let Some(v) = self.max_context_chars {
            cfg.max_context_chars = v;
        }
        self.chunking.apply(cfg);
    }
}

#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// File to segment; `.pdf` files are extracted, anything else is read as UTF-8
    #[arg(long)]
    pub file: String,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Print the text of every chunk
    #[arg(long)]
    pub show: bool,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// Manual to answer from; defaults to the first stored manual
    #[arg(long)]
    pub manual: Option<String>,

    /// Directory where uploaded PDFs are stored
    #[arg(long)]
    pub docs_dir: Option<String>,

    /// Characters of manual text sent with the question
    #[arg(long)]
    pub max_context_chars: Option<usize>,
}

impl AskArgs {
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(v) = &self.docs_dir {
            cfg.docs_dir = v.clone();
        }
        if let Some(v) = self.max_context_chars {
            cfg.max_context_chars = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = ServeArgs {
            docs_dir: Some("manuals".into()),
            bind: None,
            chunking: ChunkingArgs { window_size: Some(1000), overlap: Some(100) },
            max_context_chars: None,
            preload: false,
        };
        let mut cfg = AppConfig::default();
        args.apply(&mut cfg);

        assert_eq!(cfg.docs_dir, "manuals");
        assert_eq!(cfg.bind_addr, AppConfig::default().bind_addr);
        assert_eq!(cfg.window_size, 1000);
        assert_eq!(cfg.overlap, 100);
        assert_eq!(cfg.max_context_chars, 4000);
    }
}
