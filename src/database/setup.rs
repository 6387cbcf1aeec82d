use anyhow::{Context, Result};
use rusqlite::Connection;

use super::matches::MATCH_HISTORY_KEY;
use super::kv::delete_value;
use super::stats::PLAYER_STATS_KEY;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ready");
    Ok(())
}

/// Bulk reset: drop all player statistics and the match history.
///
/// The player ID sequence survives so IDs are never handed out twice.
pub fn clear_statistics(conn: &Connection) -> Result<()> {
    delete_value(conn, PLAYER_STATS_KEY)?;
    delete_value(conn, MATCH_HISTORY_KEY)?;
    log::info!("Player statistics and match history cleared");
    Ok(())
}

// Comment lines are dropped before splitting on ';'
fn split_sql_statements(sql: &str) -> Vec<String> {
    let without_comments: String = sql
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
