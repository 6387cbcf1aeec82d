pub mod mapping;
pub mod projector;
pub mod reader;
pub mod row;

pub use mapping::{HeroColumns, StandingColumns, determine_column_mapping, determine_standings_mapping};
pub use projector::{HeroRecord, Projection, SheetStanding, filter_heroes, project_heroes, project_standings, sort_by_win_rate};
pub use reader::{SheetLayout, column_letter, read_rows, read_sheet_file};
pub use row::{CellValue, SheetRow};
