use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::prefetch;
use crate::state::AppState;
use crate::translate::interface::TranslationRequest;
use crate::upload::{validate, UploadCandidate};

// Sits far above the widget's 5 MiB threshold so the widget's own size
// check is the one that fires, not the transport limit.
const UPLOAD_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let cache_dir = state.config.system.cache_dir.clone();

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/flows", get(get_flows))
        .route(
            "/api/translate",
            post(translate).fallback(method_not_allowed),
        )
        .route(
            "/api/upload",
            post(upload)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        // Stored previews are served straight from the cache directory.
        .nest_service("/cache", ServeDir::new(cache_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "menumate-backend"
    }))
}

async fn get_flows() -> Json<Value> {
    Json(json!({ "flows": prefetch::FLOW_ROUTES }))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<Value>, ApiError> {
    let body = state.translator.translate(&request).await?;
    Ok(Json(body))
}

async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut session_id: Option<String> = None;
    let mut candidate: Option<UploadCandidate> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::InvalidBody)?
    {
        match field.name() {
            Some("session_id") => {
                session_id = field.text().await.ok().filter(|id| !id.is_empty());
            }
            Some("file") => {
                let content_type = field.content_type().map(|ty| ty.to_string());
                let file_name = field.file_name().map(|name| name.to_string());
                let bytes = field.bytes().await.map_err(|_| ApiError::InvalidBody)?;
                candidate = Some(UploadCandidate {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            _ => {}
        }
    }

    let candidate = candidate.ok_or(ApiError::MissingFile)?;
    let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    match validate::validate(&candidate) {
        Ok(()) => {
            let content_type = candidate.content_type.as_deref().unwrap_or("image/jpeg");
            let (preview_url, uploaded_at) =
                state
                    .previews
                    .put(&session_id, &candidate.bytes, content_type)?;

            info!(
                "Accepted upload {} for session {} ({} bytes)",
                candidate.file_name.as_deref().unwrap_or("unnamed"),
                session_id,
                candidate.bytes.len()
            );

            Ok((
                StatusCode::OK,
                Json(json!({
                    "accepted": true,
                    "session_id": session_id,
                    "preview_url": preview_url,
                    "uploaded_at": uploaded_at.to_rfc3339(),
                })),
            ))
        }
        Err(rejection) => {
            // A rejected candidate clears any earlier preview and never
            // reaches the accepted path.
            state.previews.clear(&session_id);

            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "accepted": false,
                    "session_id": session_id,
                    "error": rejection.message(),
                })),
            ))
        }
    }
}
