use anyhow::Result;
use rusqlite::Connection;

use super::kv::{get_value, put_value};
use crate::domain::{MatchRecord, RecordId};
use crate::errors::EngineError;

pub const MATCH_HISTORY_KEY: &str = "match_history";

/// Match log in insertion order
pub fn load_match_history(conn: &Connection) -> Result<Vec<MatchRecord>> {
    Ok(get_value(conn, MATCH_HISTORY_KEY)?.unwrap_or_default())
}

pub fn latest_record_id(conn: &Connection) -> Result<Option<RecordId>> {
    Ok(load_match_history(conn)?.iter().map(|r| r.id).max())
}

/// Append a record; a record ID already in the log is rejected
pub fn append_match_record(conn: &Connection, record: &MatchRecord) -> Result<()> {
    let mut history = load_match_history(conn)?;
    if history.iter().any(|existing| existing.id == record.id) {
        return Err(EngineError::DuplicateRecord(record.id).into());
    }

    history.push(record.clone());
    put_value(conn, MATCH_HISTORY_KEY, &history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::initialize_schema;
    use crate::domain::Participant;
    use crate::scoring::build_match_record;
    use chrono::NaiveDate;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn
    }

    fn record(id: i64) -> MatchRecord {
        let participants = vec![Participant::new(1, "A"), Participant::new(2, "B")];
        build_match_record(&participants, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(), id).unwrap()
    }

    #[test]
    fn test_append_preserves_order() {
        let conn = conn();
        append_match_record(&conn, &record(1)).unwrap();
        append_match_record(&conn, &record(2)).unwrap();

        let ids: Vec<i64> = load_match_history(&conn).unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_record_rejected() {
        let conn = conn();
        append_match_record(&conn, &record(7)).unwrap();

        let err = append_match_record(&conn, &record(7)).unwrap_err();
        assert_eq!(err.downcast_ref::<EngineError>(), Some(&EngineError::DuplicateRecord(7)));
        assert_eq!(load_match_history(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_latest_record_id() {
        let conn = conn();
        assert_eq!(latest_record_id(&conn).unwrap(), None);
        append_match_record(&conn, &record(9)).unwrap();
        append_match_record(&conn, &record(4)).unwrap();
        assert_eq!(latest_record_id(&conn).unwrap(), Some(9));
    }

    #[test]
    fn test_history_json_shape() {
        let conn = conn();
        append_match_record(&conn, &record(3)).unwrap();

        let raw: serde_json::Value = get_value(&conn, MATCH_HISTORY_KEY).unwrap().unwrap();
        assert_eq!(raw[0]["participantCount"], 2);
        assert_eq!(raw[0]["date"], "2025-04-10");
        assert_eq!(raw[0]["results"][0]["playerId"], 1);
    }
}
