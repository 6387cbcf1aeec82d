use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::path::Path;
use std::sync::{Arc, MutexGuard};

use super::{AppState, SheetKind, SheetRankingParams, WinrateParams, error_response, parse_label};
use crate::api::models::{SheetRankingResponse, WinrateResponse, warning_messages};
use crate::domain::{DemoWindow, Metric};
use crate::services::sheets::SheetService;

fn existing_sheet(state: &AppState, kind: SheetKind) -> Result<&Path, Response> {
    match state.sheet_path(kind) {
        Some(path) if path.exists() => Ok(path),
        _ => Err(error_response(
            StatusCode::NOT_FOUND,
            format!("No {} sheet has been uploaded", kind.as_str()),
        )),
    }
}

fn lock_sheets(state: &AppState) -> Result<MutexGuard<'_, SheetService>, Response> {
    state
        .sheets
        .lock()
        .map_err(|_| error_response(StatusCode::INTERNAL_SERVER_ERROR, "Sheet cache unavailable"))
}

pub async fn get_winrate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WinrateParams>,
) -> impl IntoResponse {
    let path = match existing_sheet(&state, SheetKind::Winrate) {
        Ok(path) => path,
        Err(response) => return response,
    };
    let mut sheets = match lock_sheets(&state) {
        Ok(sheets) => sheets,
        Err(response) => return response,
    };

    match sheets.hero_win_rates(path, params.search.as_deref()) {
        Ok(projection) => Json(WinrateResponse {
            total: projection.rows.len(),
            dropped_rows: projection.dropped,
            warnings: warning_messages(&projection.warnings),
            heroes: projection.rows,
        })
        .into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Sheet Error: {:#}", e)),
    }
}

pub async fn get_sheet_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SheetRankingParams>,
) -> impl IntoResponse {
    let metric: Metric = match parse_label(params.metric.as_deref()) {
        Ok(metric) => metric,
        Err(response) => return response,
    };
    let window: DemoWindow = match parse_label(params.window.as_deref()) {
        Ok(window) => window,
        Err(response) => return response,
    };
    let path = match existing_sheet(&state, SheetKind::Standings) {
        Ok(path) => path,
        Err(response) => return response,
    };
    let mut sheets = match lock_sheets(&state) {
        Ok(sheets) => sheets,
        Err(response) => return response,
    };

    match sheets.demo_ranking(path, metric, window) {
        Ok(board) => Json(SheetRankingResponse {
            metric: metric.to_string(),
            window: window.to_string(),
            entries: board.rows,
            warnings: warning_messages(&board.warnings),
        })
        .into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Sheet Error: {:#}", e)),
    }
}
