use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

pub type PlayerId = u32;
pub type RecordId = i64;

/// Month bucket key in `YYYY-MM` form
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_match_date(value: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::invalid(format!("'{}' is not a YYYY-MM-DD date", value)))
}

/// Counters scoped to one calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub championships: u32,
    pub wins: u32,
    pub last_place: u32,
    pub points: i64,
}

impl MonthlyStats {
    pub fn metric_value(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Points => self.points,
            Metric::Championships => i64::from(self.championships),
            Metric::Wins => i64::from(self.wins),
            Metric::LastPlace => i64::from(self.last_place),
        }
    }
}

/// Cumulative statistics for one registered player
///
/// `wins` counts podium finishes (rank 1-3), not only first places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub championships: u32,
    pub wins: u32,
    pub last_place: u32,
    pub points: i64,
    #[serde(default)]
    pub monthly_data: BTreeMap<String, MonthlyStats>,
}

impl PlayerStat {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: None,
            championships: 0,
            wins: 0,
            last_place: 0,
            points: 0,
            monthly_data: BTreeMap::new(),
        }
    }

    pub fn metric_value(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Points => self.points,
            Metric::Championships => i64::from(self.championships),
            Metric::Wins => i64::from(self.wins),
            Metric::LastPlace => i64::from(self.last_place),
        }
    }

    pub fn month(&self, key: &str) -> Option<&MonthlyStats> {
        self.monthly_data.get(key)
    }

    pub fn as_participant(&self) -> Participant {
        Participant {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// A player entered into a session, in finishing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: PlayerId,
    pub name: String,
}

impl Participant {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub rank: u32,
    pub player_id: PlayerId,
    pub name: String,
    pub points: i64,
}

/// One recorded tournament; immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub participant_count: u32,
    pub results: Vec<MatchResult>,
}

impl MatchRecord {
    pub fn month_key(&self) -> String {
        month_key(self.date)
    }

    pub fn winner(&self) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.rank == 1)
    }
}

/// Leaderboard row, produced fresh per query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub avatar: String,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    #[default]
    Points,
    Championships,
    Wins,
    LastPlace,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Points => "points",
            Metric::Championships => "championships",
            Metric::Wins => "wins",
            Metric::LastPlace => "lastPlace",
        }
    }
}

impl FromStr for Metric {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "points" | "积分" => Ok(Metric::Points),
            "championships" | "冠军" => Ok(Metric::Championships),
            "wins" | "victories" | "胜场" => Ok(Metric::Wins),
            "lastPlace" | "last_place" | "laoBa" | "老八" => Ok(Metric::LastPlace),
            other => Err(EngineError::invalid(format!("unknown ranking metric '{}'", other))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window for leaderboards built from recorded statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    #[default]
    All,
    Month,
    /// Approximated as a quarter of the current month's bucket
    Week,
}

impl FromStr for TimeRange {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(TimeRange::All),
            "month" => Ok(TimeRange::Month),
            "week" => Ok(TimeRange::Week),
            other => Err(EngineError::invalid(format!("unknown time range '{}'", other))),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeRange::All => "all",
            TimeRange::Month => "month",
            TimeRange::Week => "week",
        };
        f.write_str(label)
    }
}

/// Window for the spreadsheet demo leaderboard (simulated, no timestamps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DemoWindow {
    #[default]
    All,
    Day,
    Week,
    Month,
}

impl FromStr for DemoWindow {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(DemoWindow::All),
            "day" => Ok(DemoWindow::Day),
            "week" => Ok(DemoWindow::Week),
            "month" => Ok(DemoWindow::Month),
            other => Err(EngineError::invalid(format!("unknown demo window '{}'", other))),
        }
    }
}

impl fmt::Display for DemoWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DemoWindow::All => "all",
            DemoWindow::Day => "day",
            DemoWindow::Week => "week",
            DemoWindow::Month => "month",
        };
        f.write_str(label)
    }
}
