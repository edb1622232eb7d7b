// ============================================================
// Layer 1b — HTTP Handlers
// ============================================================
// One async function per route.
//
// The registry lock is held only for in-memory work. PDF
// extraction runs on the blocking pool and the completion call
// runs after the lock is released.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::SharedState;
use crate::application::ask_use_case::{Answer, AskRequest};
use crate::application::library_use_case::PREVIEW_CHARS;
use crate::data::selector::Resolution;

// ── Request/Response types ────────────────────────

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status:             &'static str,
    pub api_key_configured: bool,
    pub manuals:            usize,
}

#[derive(Serialize)]
pub struct ManualListResponse {
    pub manuals: Vec<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename:   String,
    pub characters: usize,
    pub chunks:     usize,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: String,
}

#[derive(Deserialize)]
pub struct ReadManualQuery {
    pub file_name: String,
}

#[derive(Serialize)]
pub struct ReadManualResponse {
    pub content: String,
}

// ── GET / ─────────────────────────────────────────

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Car Manual & Maintenance Assistant is running",
    })
}

// ── GET /health ───────────────────────────────────

pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let manuals = state.registry.read().await.len();
    Json(HealthResponse {
        status: "ok",
        api_key_configured: state.completion.is_configured(),
        manuals,
    })
}

// ── GET /manuals ──────────────────────────────────

pub async fn list_manuals(
    State(state): State<SharedState>,
) -> Result<Json<ManualListResponse>, ApiError> {
    let registry = state.registry.read().await;
    let manuals  = state.library_use_case().list(&registry)?;
    Ok(Json(ManualListResponse { manuals }))
}

// ── DELETE /manuals/{name} ────────────────────────

pub async fn delete_manual(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut registry = state.registry.write().await;
    state.library_use_case().delete(&mut registry, &name)?;
    Ok(Json(DeleteResponse { deleted: name }))
}

// ── POST /upload ──────────────────────────────────

/// Accepts multipart/form-data with a `file` field holding a PDF.
pub async fn upload(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes    = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;
        upload = Some((filename, bytes));
        break;
    }
    let (filename, bytes) = upload.ok_or_else(|| ApiError::bad_request("No file provided"))?;

    let use_case = state.upload_use_case();
    let doc = tokio::task::spawn_blocking(move || use_case.ingest(&filename, &bytes))
        .await
        .map_err(|e| ApiError::internal(format!("Upload task failed: {e}")))??;

    let response = UploadResponse {
        filename:   doc.name.clone(),
        characters: doc.char_len(),
        chunks:     doc.chunks.len(),
    };
    if state.registry.write().await.insert(doc).is_some() {
        tracing::info!("Replaced existing manual '{}'", response.filename);
    }
    Ok(Json(response))
}

// ── POST /ask ─────────────────────────────────────

pub async fn ask(
    State(state): State<SharedState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<Answer>, ApiError> {
    let use_case = state.ask_use_case();
    let loader   = state.loader();

    let resolution = {
        let registry = state.registry.read().await;
        use_case.resolve(&registry, &loader, &request)?
    };

    let context = match resolution {
        Resolution::Ready(context) => context,
        Resolution::Stored(name) => {
            let selector = state.selector;
            tokio::task::spawn_blocking(move || selector.read_stored(&loader, &name))
                .await
                .map_err(|e| ApiError::internal(format!("Extraction task failed: {e}")))??
        }
    };

    let answer = use_case.answer(&request.question, context).await?;
    Ok(Json(answer))
}

// ── GET /read-manual ──────────────────────────────

pub async fn read_manual(
    State(state): State<SharedState>,
    Query(query): Query<ReadManualQuery>,
) -> Result<Json<ReadManualResponse>, ApiError> {
    let library    = state.library_use_case();
    let registered = {
        let registry = state.registry.read().await;
        library.preview_registered(&registry, &query.file_name, PREVIEW_CHARS)
    };

    let content = match registered {
        Some(content) => content,
        None => tokio::task::spawn_blocking(move || {
            library.preview_stored(&query.file_name, PREVIEW_CHARS)
        })
        .await
        .map_err(|e| ApiError::internal(format!("Extraction task failed: {e}")))??,
    };
    Ok(Json(ReadManualResponse { content }))
}
