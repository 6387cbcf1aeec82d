use log::warn;
use serde::{Serialize, Serializer};

use super::mapping::{HeroColumns, StandingColumns, determine_column_mapping, determine_standings_mapping};
use super::row::SheetRow;
use crate::domain::Metric;
use crate::errors::SheetWarning;
use crate::scoring::cumulative_points;

/// Rows that survived projection, plus what was lost on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<T> {
    pub rows: Vec<T>,
    pub dropped: usize,
    pub warnings: Vec<SheetWarning>,
}

impl<T> Projection<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Win/loss/draw line for one hero
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_games: u32,
    /// Percentage, 0-100
    #[serde(serialize_with = "serialize_two_decimals")]
    pub win_rate: f64,
}

impl HeroRecord {
    pub fn new(name: impl Into<String>, wins: u32, losses: u32, draws: u32) -> Self {
        // Counts are clamped to u32::MAX upstream, so the sum is taken wide
        let games = u64::from(wins) + u64::from(losses) + u64::from(draws);
        let total_games = u32::try_from(games).unwrap_or(u32::MAX);
        let win_rate = if games > 0 {
            f64::from(wins) / games as f64 * 100.0
        } else {
            0.0
        };
        Self {
            name: name.into(),
            wins,
            losses,
            draws,
            total_games,
            win_rate,
        }
    }

    pub fn win_rate_label(&self) -> String {
        format!("{:.2}", self.win_rate)
    }
}

fn serialize_two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

/// Championship/podium/last-place counters for one player from a standings sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStanding {
    pub name: String,
    pub avatar: Option<String>,
    pub championships: u32,
    pub wins: u32,
    pub last_place: u32,
}

impl SheetStanding {
    pub fn points(&self) -> i64 {
        cumulative_points(self.championships, self.wins, self.last_place)
    }

    pub fn metric_value(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Points => self.points(),
            Metric::Championships => i64::from(self.championships),
            Metric::Wins => i64::from(self.wins),
            Metric::LastPlace => i64::from(self.last_place),
        }
    }
}

fn count_at(row: &SheetRow, column: &Option<String>) -> u32 {
    column
        .as_deref()
        .and_then(|label| row.get(label))
        .map(|cell| cell.as_count())
        .unwrap_or(0)
}

fn text_at(row: &SheetRow, column: &Option<String>) -> Option<String> {
    column
        .as_deref()
        .and_then(|label| row.get(label))
        .and_then(|cell| cell.as_text())
}

/// Project one row; rows without a name yield `None`
pub fn project_hero_row(row: &SheetRow, columns: &HeroColumns) -> Option<HeroRecord> {
    let name = text_at(row, &columns.hero_name)?;
    Some(HeroRecord::new(
        name,
        count_at(row, &columns.wins),
        count_at(row, &columns.losses),
        count_at(row, &columns.draws),
    ))
}

pub fn project_standing_row(row: &SheetRow, columns: &StandingColumns) -> Option<SheetStanding> {
    let name = text_at(row, &columns.player_name)?;
    Some(SheetStanding {
        name,
        avatar: text_at(row, &columns.avatar),
        championships: count_at(row, &columns.championships),
        wins: count_at(row, &columns.wins),
        last_place: count_at(row, &columns.last_place),
    })
}

/// Map and project a hero sheet; output keeps sheet order
pub fn project_heroes(rows: &[SheetRow]) -> Projection<HeroRecord> {
    project_with(rows, determine_column_mapping, HeroColumns::warnings, project_hero_row)
}

/// Map and project a standings sheet; output keeps sheet order
pub fn project_standings(rows: &[SheetRow]) -> Projection<SheetStanding> {
    project_with(
        rows,
        determine_standings_mapping,
        StandingColumns::warnings,
        project_standing_row,
    )
}

fn project_with<C, T>(
    rows: &[SheetRow],
    map: fn(&SheetRow) -> C,
    mapping_warnings: fn(&C) -> Vec<SheetWarning>,
    project: fn(&SheetRow, &C) -> Option<T>,
) -> Projection<T> {
    let mut warnings = Vec::new();
    let mut projected = Vec::new();

    if let Some(sample) = rows.first() {
        let columns = map(sample);
        warnings.extend(mapping_warnings(&columns));
        projected.extend(rows.iter().filter_map(|row| project(row, &columns)));
    }

    if projected.is_empty() {
        warnings.push(SheetWarning::EmptyResult);
    }
    for warning in &warnings {
        warn!("{}", warning);
    }

    Projection {
        dropped: rows.len() - projected.len(),
        rows: projected,
        warnings,
    }
}

/// Sort by win rate, highest first; ties keep sheet order
pub fn sort_by_win_rate(heroes: &mut [HeroRecord]) {
    heroes.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
}

/// Case-insensitive name filter; an empty query keeps everything
pub fn filter_heroes(heroes: &[HeroRecord], query: &str) -> Vec<HeroRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return heroes.to_vec();
    }
    heroes
        .iter()
        .filter(|hero| hero.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
