//! Simulated time windows for spreadsheet standings.
//!
//! Standings sheets carry no per-event timestamps, so "day", "week" and
//! "month" views are a presentation heuristic: keep the top N rows and scale
//! each value down by a fixed factor. Nothing here reflects real dates.

use crate::domain::{DemoWindow, Metric, RankingEntry};
use crate::sheet::SheetStanding;

struct DemoBucket {
    limit: usize,
    factor: f64,
}

fn bucket_for(window: DemoWindow) -> Option<DemoBucket> {
    match window {
        DemoWindow::All => None,
        DemoWindow::Day => Some(DemoBucket { limit: 3, factor: 0.2 }),
        DemoWindow::Week => Some(DemoBucket { limit: 10, factor: 0.4 }),
        DemoWindow::Month => Some(DemoBucket { limit: 20, factor: 0.7 }),
    }
}

/// Demo leaderboard over sheet standings.
///
/// `id` is the 1-based row position in the sheet.
pub fn build_demo_ranking(
    standings: &[SheetStanding],
    metric: Metric,
    window: DemoWindow,
) -> Vec<RankingEntry> {
    let mut scored: Vec<(usize, &SheetStanding, i64)> = standings
        .iter()
        .enumerate()
        .map(|(idx, standing)| (idx, standing, standing.metric_value(metric)))
        .collect();
    scored.sort_by(|a, b| b.2.cmp(&a.2));

    let bucket = bucket_for(window);
    if let Some(bucket) = &bucket {
        scored.truncate(bucket.limit);
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (row_idx, standing, value))| RankingEntry {
            rank: position + 1,
            id: row_idx as u32 + 1,
            name: standing.name.clone(),
            avatar: standing.avatar.clone().unwrap_or_default(),
            score: match &bucket {
                Some(bucket) => scale(value, bucket.factor),
                None => value,
            },
        })
        .collect()
}

// Positive values never scale below 1
fn scale(value: i64, factor: f64) -> i64 {
    let scaled = (value as f64 * factor).floor() as i64;
    if value > 0 { scaled.max(1) } else { scaled }
}
