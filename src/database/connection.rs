use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use super::setup::initialize_schema;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    let pool = build_pool(manager, None)?;
    initialize_pool(&pool)?;
    Ok(pool)
}

/// Single-connection pool over a private in-memory database
pub fn create_memory_pool() -> Result<DbPool> {
    let pool = build_pool(SqliteConnectionManager::memory(), Some(1))?;
    initialize_pool(&pool)?;
    Ok(pool)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path)
}

fn build_pool(manager: SqliteConnectionManager, max_size: Option<u32>) -> Result<DbPool> {
    let mut builder = r2d2::Pool::builder();
    if let Some(size) = max_size {
        builder = builder.max_size(size);
    }
    builder
        .build(manager)
        .context("Failed to create database connection pool")
}

fn initialize_pool(pool: &DbPool) -> Result<()> {
    let conn = get_connection(pool)?;
    initialize_schema(&conn)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
