use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::fs;
use std::sync::Arc;

use super::{AppState, SheetKind, error_response};
use crate::api::models::UploadResponse;
use crate::sheet::read_rows;

fn is_authorized(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(token) = state.config.server.admin_token.as_deref() else {
        return false;
    };
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    auth_header == Some(format!("Bearer {}", token).as_str())
}

/// Replace an uploaded sheet and drop its cached projections
pub async fn upload_sheet(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<SheetKind>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let Some(path) = state.sheet_path(kind) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("No {} sheet location is configured", kind.as_str()),
        );
    };

    if let Err(e) = read_rows(&body, state.config.server.sheet_layout) {
        return error_response(StatusCode::BAD_REQUEST, format!("Unreadable sheet: {:#}", e));
    }

    if let Err(e) = fs::write(path, &body) {
        log::error!("Failed to store {} sheet at {}: {:?}", kind.as_str(), path.display(), e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store sheet");
    }

    let invalidated = match state.sheets.lock() {
        Ok(mut sheets) => sheets.invalidate(path),
        Err(_) => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Sheet cache unavailable");
        }
    };
    log::info!("Admin uploaded {} sheet ({} bytes)", kind.as_str(), body.len());

    Json(UploadResponse {
        kind: kind.as_str().to_string(),
        bytes: body.len(),
        invalidated,
    })
    .into_response()
}
