pub mod settings;

pub use settings::{AppConfig, LastPlaceRule, ScoringSettings, ServerSettings, StorageSettings};
