use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers::{
    admin::upload_sheet,
    rankings::{get_matches, get_players, get_rankings},
    sheets::{get_sheet_rankings, get_winrate},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rankings", get(get_rankings))
        .route("/api/matches", get(get_matches))
        .route("/api/players", get(get_players))
        .route("/api/winrate", get(get_winrate))
        .route("/api/sheet-rankings", get(get_sheet_rankings))
        .route("/api/sheets/:kind", put(upload_sheet))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
