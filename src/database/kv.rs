use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::storage_context;

/// Read and decode the JSON document stored under `key`
pub fn get_value<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let sql = "SELECT value FROM kv_store WHERE key = ?1";

    let raw: Option<String> = conn
        .query_row(sql, params![key], |row| row.get(0))
        .optional()
        .with_context(|| storage_context("read", key))?;

    raw.map(|json| {
        serde_json::from_str(&json).with_context(|| storage_context("decode", key))
    })
    .transpose()
}

/// Encode and store `value` under `key`, replacing what was there
pub fn put_value<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).with_context(|| storage_context("encode", key))?;
    let sql = "INSERT INTO kv_store (key, value) VALUES (?1, ?2) \
               ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";

    conn.execute(sql, params![key, json])
        .with_context(|| storage_context("write", key))?;
    Ok(())
}

/// Remove `key`; returns whether anything was stored
pub fn delete_value(conn: &Connection, key: &str) -> Result<bool> {
    let sql = "DELETE FROM kv_store WHERE key = ?1";

    let affected = conn
        .execute(sql, params![key])
        .with_context(|| storage_context("delete", key))?;
    Ok(affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::initialize_schema;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_key_is_none() {
        let conn = conn();
        let value: Option<Vec<u32>> = get_value(&conn, "nothing").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_put_overwrites() {
        let conn = conn();
        put_value(&conn, "k", &vec![1, 2]).unwrap();
        put_value(&conn, "k", &vec![3]).unwrap();

        let value: Option<Vec<u32>> = get_value(&conn, "k").unwrap();
        assert_eq!(value, Some(vec![3]));
    }

    #[test]
    fn test_delete_reports_presence() {
        let conn = conn();
        put_value(&conn, "k", "v").unwrap();
        assert!(delete_value(&conn, "k").unwrap());
        assert!(!delete_value(&conn, "k").unwrap());
    }

    #[test]
    fn test_decode_failure_names_key() {
        let conn = conn();
        put_value(&conn, "k", "not a list").unwrap();
        let err = get_value::<Vec<u32>>(&conn, "k").unwrap_err();
        assert!(err.to_string().contains("key: k"));
    }
}
