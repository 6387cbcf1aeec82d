pub mod connection;
pub mod kv;
pub mod matches;
pub mod setup;
pub mod stats;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use matches::{append_match_record, latest_record_id, load_match_history};
pub use setup::clear_statistics;
pub use stats::{allocate_player_id, load_player_stats, save_player_stats};
