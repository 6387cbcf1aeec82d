use log::debug;

use crate::config::LastPlaceRule;
use crate::domain::{MatchRecord, MatchResult, MonthlyStats, PlayerStat, PlayerStatCollection};

/// Fold one match record into a copy of the player statistics.
///
/// Results for players missing from `stats` are skipped. Applying the same
/// record twice counts it twice; callers must apply each record exactly once.
pub fn apply_match_record(
    stats: &PlayerStatCollection,
    record: &MatchRecord,
    rule: LastPlaceRule,
) -> PlayerStatCollection {
    let mut updated = stats.clone();
    let month = record.month_key();

    for result in &record.results {
        let Some(player) = updated.get_mut(result.player_id) else {
            debug!(
                "Skipping result for unregistered player {} ({})",
                result.player_id, result.name
            );
            continue;
        };

        let delta = result_delta(result, record.participant_count, rule);
        fold_into_player(player, &month, &delta);
    }

    updated
}

/// Counter increments one result contributes
fn result_delta(result: &MatchResult, participant_count: u32, rule: LastPlaceRule) -> MonthlyStats {
    MonthlyStats {
        championships: u32::from(result.rank == 1),
        wins: u32::from(result.rank <= 3),
        last_place: u32::from(rule.is_last_place(result.rank, participant_count)),
        points: result.points,
    }
}

// Cumulative counters and the month bucket move in lockstep
fn fold_into_player(player: &mut PlayerStat, month: &str, delta: &MonthlyStats) {
    player.championships = player.championships.saturating_add(delta.championships);
    player.wins = player.wins.saturating_add(delta.wins);
    player.last_place = player.last_place.saturating_add(delta.last_place);
    player.points = player.points.saturating_add(delta.points);

    let bucket = player.monthly_data.entry(month.to_string()).or_default();
    add_into(bucket, delta);
}

fn add_into(bucket: &mut MonthlyStats, delta: &MonthlyStats) {
    bucket.championships = bucket.championships.saturating_add(delta.championships);
    bucket.wins = bucket.wins.saturating_add(delta.wins);
    bucket.last_place = bucket.last_place.saturating_add(delta.last_place);
    bucket.points = bucket.points.saturating_add(delta.points);
}
