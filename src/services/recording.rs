use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use rusqlite::Transaction;

use crate::config::ScoringSettings;
use crate::database::{self, DbPool};
use crate::domain::{MatchRecord, Participant, PlayerId, PlayerStatCollection};
use crate::errors::EngineError;
use crate::scoring::{apply_match_record, create_match_record, validate_match_record};

/// Records new tournaments and folds them into player statistics
pub struct RecordingService {
    pool: DbPool,
    scoring: ScoringSettings,
}

impl RecordingService {
    pub fn new(pool: DbPool, scoring: ScoringSettings) -> Self {
        Self { pool, scoring }
    }

    /// Record a tournament; `participant_ids` are ordered winner first
    pub fn record(&self, participant_ids: &[PlayerId], date: Option<NaiveDate>) -> Result<MatchRecord> {
        self.validate_field_size(participant_ids.len())?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction()
            .context("Failed to start recording transaction")?;

        let stats = database::load_player_stats(&tx)?;
        let participants = resolve_participants(&stats, participant_ids)?;
        let mut record = create_match_record(&participants, date)?;
        // IDs are millisecond stamps; keep them strictly increasing
        if let Some(latest) = database::latest_record_id(&tx)? {
            record.id = record.id.max(latest + 1);
        }

        self.commit_record(tx, &stats, &record)?;
        Ok(record)
    }

    /// Fold an already-built record; malformed or previously seen records are rejected
    pub fn apply(&self, record: &MatchRecord) -> Result<()> {
        validate_match_record(record)?;
        self.validate_field_size(record.participant_count as usize)?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction()
            .context("Failed to start recording transaction")?;

        let stats = database::load_player_stats(&tx)?;
        self.commit_record(tx, &stats, record)
    }

    fn commit_record(
        &self,
        tx: Transaction<'_>,
        stats: &PlayerStatCollection,
        record: &MatchRecord,
    ) -> Result<()> {
        database::append_match_record(&tx, record)?;
        let updated = apply_match_record(stats, record, self.scoring.last_place_rule);
        database::save_player_stats(&tx, &updated)?;
        tx.commit().context("Failed to commit match record")?;

        info!(
            "Recorded tournament {} on {} with {} participants",
            record.id, record.date, record.participant_count
        );
        Ok(())
    }

    fn validate_field_size(&self, count: usize) -> Result<(), EngineError> {
        let (min, max) = (self.scoring.min_participants, self.scoring.max_participants);
        if count < min || count > max {
            return Err(EngineError::invalid(format!(
                "a tournament takes {} to {} participants, got {}",
                min, max, count
            )));
        }
        Ok(())
    }
}

fn resolve_participants(
    stats: &PlayerStatCollection,
    ids: &[PlayerId],
) -> Result<Vec<Participant>, EngineError> {
    ids.iter()
        .map(|&id| {
            stats
                .get(id)
                .map(|player| player.as_participant())
                .ok_or_else(|| EngineError::invalid(format!("unknown player id {}", id)))
        })
        .collect()
}
