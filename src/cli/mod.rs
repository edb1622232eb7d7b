// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// Business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `serve`   — runs the HTTP API for the web frontend
//   2. `segment` — shows how a file would be chunked
//   3. `ask`     — answers one question from the terminal
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use commands::{AskArgs, Commands, SegmentArgs, ServeArgs};

use crate::application::ask_use_case::AskRequest;
use crate::data::loader::PdfExtractor;
use crate::data::registry::Registry;
use crate::domain::traits::TextExtractor;
use crate::http::{self, AppState};
use crate::infra::config::AppConfig;
use crate::llm::openai::OpenAiCompletion;

#[derive(Parser, Debug)]
#[command(
    name = "manual-qa",
    version,
    about = "Upload car manuals as PDFs, then ask questions about them."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load configuration and dispatch to the chosen command.
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::from_env().context("Invalid environment configuration")?;

        match self.command {
            Commands::Serve(args)   => run_serve(config, args).await,
            Commands::Segment(args) => run_segment(config, args),
            Commands::Ask(args)     => run_ask(config, args).await,
        }
    }
}

/// Handles the `serve` subcommand.
async fn run_serve(mut config: AppConfig, args: ServeArgs) -> Result<()> {
    args.apply(&mut config);

    if !config.api_key_configured() {
        tracing::warn!("OPENAI_API_KEY is not set; /ask will fail until it is configured");
    }

    let completion = Arc::new(OpenAiCompletion::from_config(&config));
    let state = AppState::new(config, Arc::new(PdfExtractor), completion)
        .context("Invalid chunking or context settings")?;

    if args.preload {
        let mut registry = state.registry.write().await;
        let count = state.library_use_case().preload(&mut registry)?;
        tracing::info!("Preloaded {} manuals", count);
    }

    http::serve(Arc::new(state)).await
}

/// Handles the `segment` subcommand.
fn run_segment(mut config: AppConfig, args: SegmentArgs) -> Result<()> {
    args.chunking.apply(&mut config);
    let segmenter = config.segmenter()?;

    let path = Path::new(&args.file);
    let text = if is_pdf(path) {
        let bytes = fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;
        PdfExtractor.extract(&args.file, &bytes)?
    } else {
        fs::read_to_string(path).with_context(|| format!("Cannot read '{}'", path.display()))?
    };

    let chunks = segmenter.segment(&text);
    println!(
        "{} chars → {} chunks (window {}, overlap {})",
        text.chars().count(),
        chunks.len(),
        segmenter.window_size(),
        segmenter.overlap()
    );

    for chunk in &chunks {
        println!("#{:<4} start {:>8}  end {:>8}  len {:>6}", chunk.index, chunk.start, chunk.end(), chunk.char_len());
        if args.show {
            println!("{}\n", chunk.text);
        }
    }
    Ok(())
}

/// Handles the `ask` subcommand.
async fn run_ask(mut config: AppConfig, args: AskArgs) -> Result<()> {
    args.apply(&mut config);

    let completion = Arc::new(OpenAiCompletion::from_config(&config));
    let state = AppState::new(config, Arc::new(PdfExtractor), completion)
        .context("Invalid chunking or context settings")?;

    let mut registry = Registry::new();
    if let Some(name) = &args.manual {
        state
            .library_use_case()
            .load(&mut registry, name)
            .with_context(|| format!("Cannot load manual '{name}'"))?;
    }

    let request = AskRequest {
        question:    args.question,
        manual_name: args.manual,
    };
    let answer = state
        .ask_use_case()
        .ask(&registry, &state.loader(), &request)
        .await?;

    println!("\nAnswer ({}):\n{}", answer.source, answer.answer);
    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
