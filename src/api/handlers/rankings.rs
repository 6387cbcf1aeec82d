use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, RankingParams, error_response, parse_label};
use crate::api::models::LeaderboardResponse;
use crate::domain::{Metric, TimeRange};
use crate::services::standings::StandingsService;

pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let metric: Metric = match parse_label(params.metric.as_deref()) {
        Ok(metric) => metric,
        Err(response) => return response,
    };
    let range: TimeRange = match parse_label(params.range.as_deref()) {
        Ok(range) => range,
        Err(response) => return response,
    };

    let service = StandingsService::new(state.pool.clone());
    match service.leaderboard(metric, range) {
        Ok(entries) => Json(LeaderboardResponse {
            metric: metric.to_string(),
            range: range.to_string(),
            entries,
        })
        .into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)),
    }
}

pub async fn get_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = StandingsService::new(state.pool.clone());
    match service.history() {
        Ok(history) => Json(history).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)),
    }
}

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = StandingsService::new(state.pool.clone());
    match service.players() {
        Ok(players) => Json(players).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)),
    }
}
