use anyhow::Result;
use rusqlite::Connection;

use super::kv::{get_value, put_value};
use crate::domain::{PlayerId, PlayerStatCollection};

pub const PLAYER_STATS_KEY: &str = "player_stats";
const PLAYER_ID_SEQ_KEY: &str = "player_id_seq";

pub fn load_player_stats(conn: &Connection) -> Result<PlayerStatCollection> {
    Ok(get_value(conn, PLAYER_STATS_KEY)?.unwrap_or_default())
}

pub fn save_player_stats(conn: &Connection, stats: &PlayerStatCollection) -> Result<()> {
    put_value(conn, PLAYER_STATS_KEY, stats)
}

/// Hand out the next player ID; the sequence outlives bulk resets
pub fn allocate_player_id(conn: &Connection, stats: &PlayerStatCollection) -> Result<PlayerId> {
    let last: PlayerId = get_value(conn, PLAYER_ID_SEQ_KEY)?.unwrap_or(0);
    let next = last.max(stats.max_id().unwrap_or(0)) + 1;
    put_value(conn, PLAYER_ID_SEQ_KEY, &next)?;
    Ok(next)
}
