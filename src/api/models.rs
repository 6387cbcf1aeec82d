use serde::Serialize;

use crate::domain::RankingEntry;
use crate::errors::SheetWarning;
use crate::sheet::HeroRecord;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub metric: String,
    pub range: String,
    pub entries: Vec<RankingEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinrateResponse {
    pub heroes: Vec<HeroRecord>,
    pub total: usize,
    pub dropped_rows: usize,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRankingResponse {
    pub metric: String,
    pub window: String,
    pub entries: Vec<RankingEntry>,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub kind: String,
    pub bytes: usize,
    pub invalidated: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn warning_messages(warnings: &[SheetWarning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}
