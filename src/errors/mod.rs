use thiserror::Error;

/// Errors raised to the caller by the scoring engine.
///
/// Only structurally invalid calls end up here. Row-level and entry-level
/// problems are reported as [`SheetWarning`] values or silently skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Match record {0} has already been recorded")]
    DuplicateRecord(i64),
}

impl EngineError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }
}

/// Non-fatal conditions surfaced while mapping and projecting a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetWarning {
    /// No header alias or positional column could supply this field
    UnresolvedColumn { field: &'static str },
    /// Projection finished with zero usable rows
    EmptyResult,
}

impl std::fmt::Display for SheetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetWarning::UnresolvedColumn { field } => {
                write!(f, "Could not resolve a column for '{}', defaulting to empty", field)
            }
            SheetWarning::EmptyResult => write!(f, "No usable rows found in sheet"),
        }
    }
}

/// Context message for key-value store failures
pub fn storage_context(operation: &str, key: &str) -> String {
    format!("Failed to {} stored value for key: {}", operation, key)
}

/// Context message for spreadsheet read failures
pub fn sheet_context(path: &std::path::Path) -> String {
    format!("Failed to read sheet: {}", path.display())
}
