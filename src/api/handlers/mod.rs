use std::path::{Path, PathBuf};
use std::sync::Mutex;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::config::settings::AppConfig;
use crate::services::sheets::SheetService;

pub mod admin;
pub mod rankings;
pub mod sheets;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
    pub sheets: Mutex<SheetService>,
}

impl AppState {
    pub fn new(pool: Pool<SqliteConnectionManager>, config: AppConfig) -> Self {
        let sheets = Mutex::new(SheetService::new(config.server.sheet_layout));
        Self {
            pool,
            config,
            sheets,
        }
    }

    pub fn sheet_path(&self, kind: SheetKind) -> Option<&Path> {
        let path: &Option<PathBuf> = match kind {
            SheetKind::Winrate => &self.config.server.winrate_sheet,
            SheetKind::Standings => &self.config.server.standings_sheet,
        };
        path.as_deref()
    }
}

/// Which uploaded sheet a request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    Winrate,
    Standings,
}

impl SheetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Winrate => "winrate",
            SheetKind::Standings => "standings",
        }
    }
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub metric: Option<String>,
    pub range: Option<String>,
}

#[derive(Deserialize)]
pub struct WinrateParams {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct SheetRankingParams {
    pub metric: Option<String>,
    pub window: Option<String>,
}

pub fn error_response(status: StatusCode, message: impl ToString) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Parse an optional query label, falling back to the type's default
pub fn parse_label<T>(value: Option<&str>) -> Result<T, Response>
where
    T: std::str::FromStr + Default,
    T::Err: ToString,
{
    match value {
        None | Some("") => Ok(T::default()),
        Some(label) => label
            .parse()
            .map_err(|e: T::Err| error_response(StatusCode::BAD_REQUEST, e)),
    }
}
