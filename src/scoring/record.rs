use std::collections::HashSet;

use chrono::{Local, NaiveDate, Utc};

use super::rules::match_points;
use crate::domain::{MatchRecord, MatchResult, Participant, RecordId};
use crate::errors::EngineError;

/// Build a match record stamped with the current time.
///
/// `participants` must already be ordered best to worst; they are not re-sorted.
/// `date` defaults to today's local calendar date.
pub fn create_match_record(
    participants: &[Participant],
    date: Option<NaiveDate>,
) -> Result<MatchRecord, EngineError> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    build_match_record(participants, date, Utc::now().timestamp_millis())
}

/// Build a match record with an explicit ID
pub fn build_match_record(
    participants: &[Participant],
    date: NaiveDate,
    id: RecordId,
) -> Result<MatchRecord, EngineError> {
    validate_participants(participants)?;

    let participant_count = participants.len() as u32;
    let results = participants
        .iter()
        .enumerate()
        .map(|(idx, player)| {
            let rank = idx as u32 + 1;
            MatchResult {
                rank,
                player_id: player.id,
                name: player.name.clone(),
                points: match_points(rank, participant_count),
            }
        })
        .collect();

    Ok(MatchRecord {
        id,
        date,
        participant_count,
        results,
    })
}

fn validate_participants(participants: &[Participant]) -> Result<(), EngineError> {
    if participants.is_empty() {
        return Err(EngineError::invalid("participant list is empty"));
    }
    if participants.len() < 2 {
        return Err(EngineError::invalid("a tournament needs at least two participants"));
    }

    let mut seen = HashSet::new();
    for player in participants {
        if !seen.insert(player.id) {
            return Err(EngineError::invalid(format!(
                "player {} ({}) appears more than once",
                player.id, player.name
            )));
        }
    }
    Ok(())
}

/// Check that a record built elsewhere is shaped like one from [`build_match_record`]
pub fn validate_match_record(record: &MatchRecord) -> Result<(), EngineError> {
    if record.participant_count < 2 {
        return Err(EngineError::invalid("a tournament needs at least two participants"));
    }
    if record.results.len() != record.participant_count as usize {
        return Err(EngineError::invalid(format!(
            "record {} lists {} results for {} participants",
            record.id,
            record.results.len(),
            record.participant_count
        )));
    }

    let mut seen = HashSet::new();
    for (idx, result) in record.results.iter().enumerate() {
        let expected_rank = idx as u32 + 1;
        if result.rank != expected_rank {
            return Err(EngineError::invalid(format!(
                "record {} has rank {} where rank {} was expected",
                record.id, result.rank, expected_rank
            )));
        }
        if result.points != match_points(result.rank, record.participant_count) {
            return Err(EngineError::invalid(format!(
                "record {} awards {} points for rank {}",
                record.id, result.points, result.rank
            )));
        }
        if !seen.insert(result.player_id) {
            return Err(EngineError::invalid(format!(
                "player {} appears more than once in record {}",
                result.player_id, record.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Vec<Participant> {
        vec![
            Participant::new(1, "A"),
            Participant::new(2, "B"),
            Participant::new(3, "C"),
        ]
    }

    #[test]
    fn test_ranks_follow_input_order() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let record = build_match_record(&trio(), date, 42).unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.participant_count, 3);
        let summary: Vec<(u32, u32, i64)> = record
            .results
            .iter()
            .map(|r| (r.rank, r.player_id, r.points))
            .collect();
        assert_eq!(summary, vec![(1, 1, 20), (2, 2, 15), (3, 3, 12)]);
        assert_eq!(record.winner().map(|r| r.name.as_str()), Some("A"));
    }

    #[test]
    fn test_ranks_form_a_permutation() {
        let participants: Vec<Participant> = (1..=10)
            .map(|id| Participant::new(id, format!("P{}", id)))
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let record = build_match_record(&participants, date, 1).unwrap();

        assert_eq!(record.results.len(), record.participant_count as usize);
        let ranks: Vec<u32> = record.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u32>>());
        assert_eq!(record.results[9].points, 1);
    }

    #[test]
    fn test_empty_participants_rejected() {
        let result = create_match_record(&[], None);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_single_participant_rejected() {
        let result = create_match_record(&[Participant::new(1, "A")], None);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let participants = vec![Participant::new(1, "A"), Participant::new(1, "A")];
        let result = create_match_record(&participants, None);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_built_records_pass_validation() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let record = build_match_record(&trio(), date, 1).unwrap();
        assert_eq!(validate_match_record(&record), Ok(()));
    }

    #[test]
    fn test_validation_rejects_malformed_records() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let valid = build_match_record(&trio(), date, 1).unwrap();

        let mut shared_first = valid.clone();
        shared_first.participant_count = 7;
        shared_first.results.truncate(2);
        shared_first.results[1].rank = 1;
        assert!(matches!(validate_match_record(&shared_first), Err(EngineError::InvalidInput(_))));

        let mut tied = valid.clone();
        tied.results[1].rank = 1;
        tied.results[1].points = 20;
        assert!(matches!(validate_match_record(&tied), Err(EngineError::InvalidInput(_))));

        let mut inflated = valid.clone();
        inflated.results[2].points = 100;
        assert!(matches!(validate_match_record(&inflated), Err(EngineError::InvalidInput(_))));

        let mut repeated = valid.clone();
        repeated.results[2].player_id = 1;
        assert!(matches!(validate_match_record(&repeated), Err(EngineError::InvalidInput(_))));

        let mut solo = valid;
        solo.participant_count = 1;
        solo.results.truncate(1);
        assert!(matches!(validate_match_record(&solo), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_date_defaults_to_today() {
        let record = create_match_record(&trio(), None).unwrap();
        assert_eq!(record.date, Local::now().date_naive());
        assert!(record.id > 0);
    }
}
