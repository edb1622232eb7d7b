// ============================================================
// Layer 1b — HTTP Interface
// ============================================================
// axum router exposing the manual assistant to the web UI.
//
//   GET    /                 → banner
//   GET    /health           → status + whether an API key is set
//   GET    /manuals          → stored and registered manual names
//   DELETE /manuals/{name}   → forget a manual
//   POST   /upload           → multipart PDF upload
//   POST   /ask              → question → answer
//   GET    /read-manual      → first characters of a manual
//
// AppState owns the registry behind one RwLock. Handlers build
// the use cases they need from the state for each request.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::application::{
    ask_use_case::AskUseCase, library_use_case::LibraryUseCase, upload_use_case::UploadUseCase,
};
use crate::data::{loader::PdfLoader, registry::Registry, segmenter::Segmenter, selector::ContextSelector};
use crate::domain::error::CoreResult;
use crate::domain::traits::{CompletionService, TextExtractor};
use crate::infra::{config::AppConfig, file_store::FileStore};

pub struct AppState {
    pub config:     AppConfig,
    pub registry:   RwLock<Registry>,
    pub store:      FileStore,
    pub extractor:  Arc<dyn TextExtractor>,
    pub completion: Arc<dyn CompletionService>,
    pub segmenter:  Segmenter,
    pub selector:   ContextSelector,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Validates the chunking/selection settings; starts with an empty registry.
    pub fn new(
        config: AppConfig,
        extractor: Arc<dyn TextExtractor>,
        completion: Arc<dyn CompletionService>,
    ) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            segmenter: config.segmenter()?,
            selector: config.selector()?,
            store: FileStore::new(&config.docs_dir),
            registry: RwLock::new(Registry::new()),
            config,
            extractor,
            completion,
        })
    }

    pub fn loader(&self) -> PdfLoader {
        PdfLoader::new(self.store.clone(), self.extractor.clone())
    }

    pub fn upload_use_case(&self) -> UploadUseCase {
        UploadUseCase::new(self.store.clone(), self.extractor.clone(), self.segmenter)
    }

    pub fn ask_use_case(&self) -> AskUseCase {
        AskUseCase::new(self.selector, self.completion.clone())
    }

    pub fn library_use_case(&self) -> LibraryUseCase {
        LibraryUseCase::new(self.store.clone(), self.loader(), self.segmenter)
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: SharedState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/manuals", get(handlers::list_manuals))
        .route("/manuals/{name}", delete(handlers::delete_manual))
        .route("/upload", post(handlers::upload))
        .route("/ask", post(handlers::ask))
        .route("/read-manual", get(handlers::read_manual))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: SharedState) -> anyhow::Result<()> {
    use anyhow::Context;

    let addr     = state.config.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind to '{addr}'"))?;

    tracing::info!("Manual assistant listening on http://{}", addr);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
