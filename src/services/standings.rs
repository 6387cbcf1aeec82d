use anyhow::Result;
use chrono::NaiveDate;

use crate::database::{self, DbPool};
use crate::domain::{MatchRecord, Metric, PlayerStat, RankingEntry, TimeRange};
use crate::ranking;

/// Read side over recorded statistics, plus the bulk reset
pub struct StandingsService {
    pool: DbPool,
}

impl StandingsService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn leaderboard(&self, metric: Metric, range: TimeRange) -> Result<Vec<RankingEntry>> {
        let conn = database::get_connection(&self.pool)?;
        let stats = database::load_player_stats(&conn)?;
        Ok(ranking::current_ranking_list(&stats, metric, range))
    }

    pub fn leaderboard_on(
        &self,
        metric: Metric,
        range: TimeRange,
        today: NaiveDate,
    ) -> Result<Vec<RankingEntry>> {
        let conn = database::get_connection(&self.pool)?;
        let stats = database::load_player_stats(&conn)?;
        Ok(ranking::build_ranking_list(&stats, metric, range, today))
    }

    /// Match log, newest first
    pub fn history(&self) -> Result<Vec<MatchRecord>> {
        let conn = database::get_connection(&self.pool)?;
        let mut history = database::load_match_history(&conn)?;
        history.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(history)
    }

    pub fn players(&self) -> Result<Vec<PlayerStat>> {
        let conn = database::get_connection(&self.pool)?;
        Ok(database::load_player_stats(&conn)?.into_vec())
    }

    pub fn reset(&self) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        database::clear_statistics(&conn)
    }
}
