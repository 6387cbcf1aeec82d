use std::path::PathBuf;

use crate::sheet::SheetLayout;

/// Which finisher counts as "last place" (老八) when folding a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastPlaceRule {
    /// rank == participant count
    #[default]
    ActualLast,
    /// rank == 8, regardless of field size
    LiteralEighth,
    /// Either of the above; a field larger than 8 gets two last places
    Either,
}

impl LastPlaceRule {
    pub fn is_last_place(&self, rank: u32, participant_count: u32) -> bool {
        match self {
            LastPlaceRule::ActualLast => rank == participant_count,
            LastPlaceRule::LiteralEighth => rank == 8,
            LastPlaceRule::Either => rank == participant_count || rank == 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub last_place_rule: LastPlaceRule,
    pub min_participants: usize,
    pub max_participants: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            last_place_rule: LastPlaceRule::default(),
            min_participants: 2,
            max_participants: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("BUDOKAI_DB_PATH")
                .unwrap_or_else(|_| "budokai.db".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServerSettings {
    /// Bearer token for sheet uploads; uploads are refused when unset
    pub admin_token: Option<String>,
    pub winrate_sheet: Option<PathBuf>,
    pub standings_sheet: Option<PathBuf>,
    pub sheet_layout: SheetLayout,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self {
            admin_token: std::env::var("BUDOKAI_ADMIN_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub storage: StorageSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            storage: StorageSettings::default(),
            server: ServerSettings::from_env(),
        }
    }
}
