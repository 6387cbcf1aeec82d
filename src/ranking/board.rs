use chrono::{Local, NaiveDate};

use crate::domain::{Metric, PlayerStat, PlayerStatCollection, RankingEntry, TimeRange, month_key};

// No day-level data exists; a week is taken as a quarter of the month bucket
const WEEKS_PER_MONTH: i64 = 4;

/// Leaderboard over recorded statistics for the month containing `today`.
///
/// Sorted by the resolved score, highest first; ties keep collection order.
pub fn build_ranking_list(
    stats: &PlayerStatCollection,
    metric: Metric,
    range: TimeRange,
    today: NaiveDate,
) -> Vec<RankingEntry> {
    let month = month_key(today);

    let mut scored: Vec<(&PlayerStat, i64)> = stats
        .iter()
        .map(|player| (player, resolve_score(player, metric, range, &month)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (player, score))| RankingEntry {
            rank: idx + 1,
            id: player.id,
            name: player.name.clone(),
            avatar: player.avatar.clone().unwrap_or_default(),
            score,
        })
        .collect()
}

/// Leaderboard relative to the local calendar date
pub fn current_ranking_list(
    stats: &PlayerStatCollection,
    metric: Metric,
    range: TimeRange,
) -> Vec<RankingEntry> {
    build_ranking_list(stats, metric, range, Local::now().date_naive())
}

fn resolve_score(player: &PlayerStat, metric: Metric, range: TimeRange, month: &str) -> i64 {
    let month_value = || {
        player
            .month(month)
            .map(|bucket| bucket.metric_value(metric))
            .unwrap_or(0)
    };

    match range {
        TimeRange::All => player.metric_value(metric),
        TimeRange::Month => month_value(),
        TimeRange::Week => month_value().div_euclid(WEEKS_PER_MONTH),
    }
}
