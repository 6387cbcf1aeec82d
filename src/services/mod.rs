pub mod ingestion;
pub mod recording;
pub mod server;
pub mod sheets;
pub mod standings;
