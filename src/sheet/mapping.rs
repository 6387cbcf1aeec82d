use super::row::SheetRow;
use crate::errors::SheetWarning;

/// Where a target field may come from
struct ColumnSpec {
    field: &'static str,
    aliases: &'static [&'static str],
    /// Best-effort guess used when no alias is present
    fallback_position: Option<usize>,
}

// Single letters are the legacy layout of the hero sheet (D = name, I/J/K = W/L/D)
const HERO_NAME: ColumnSpec = ColumnSpec {
    field: "heroName",
    aliases: &["D", "英雄名称", "英雄"],
    fallback_position: Some(3),
};
const HERO_WINS: ColumnSpec = ColumnSpec {
    field: "wins",
    aliases: &["I", "胜场", "胜利"],
    fallback_position: Some(8),
};
const HERO_LOSSES: ColumnSpec = ColumnSpec {
    field: "losses",
    aliases: &["J", "失败"],
    fallback_position: Some(9),
};
const HERO_DRAWS: ColumnSpec = ColumnSpec {
    field: "draws",
    aliases: &["K", "平局"],
    fallback_position: Some(10),
};

const PLAYER_NAME: ColumnSpec = ColumnSpec {
    field: "playerName",
    aliases: &["昵称", "nickname", "Nickname", "name"],
    fallback_position: Some(0),
};
const PLAYER_AVATAR: ColumnSpec = ColumnSpec {
    field: "avatar",
    aliases: &["头像", "avatar"],
    fallback_position: None,
};
const PLAYER_WINS: ColumnSpec = ColumnSpec {
    field: "wins",
    aliases: &["胜场数", "wins", "victories"],
    fallback_position: Some(2),
};
const PLAYER_CHAMPIONSHIPS: ColumnSpec = ColumnSpec {
    field: "championships",
    aliases: &["冠军数", "championships"],
    fallback_position: Some(3),
};
const PLAYER_LAST_PLACE: ColumnSpec = ColumnSpec {
    field: "lastPlace",
    aliases: &["老八数", "lao ba", "lastPlace"],
    fallback_position: Some(4),
};

fn resolve_column(sample: &SheetRow, spec: &ColumnSpec) -> Option<String> {
    spec.aliases
        .iter()
        .find(|alias| sample.contains(alias))
        .map(|alias| alias.to_string())
        .or_else(|| {
            spec.fallback_position
                .and_then(|pos| sample.label_at(pos))
                .map(str::to_string)
        })
}

fn unresolved(column: &Option<String>, field: &'static str) -> Option<SheetWarning> {
    match column {
        Some(_) => None,
        None => Some(SheetWarning::UnresolvedColumn { field }),
    }
}

/// Column labels for the hero win-rate sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroColumns {
    pub hero_name: Option<String>,
    pub wins: Option<String>,
    pub losses: Option<String>,
    pub draws: Option<String>,
}

impl HeroColumns {
    pub fn warnings(&self) -> Vec<SheetWarning> {
        [
            unresolved(&self.hero_name, HERO_NAME.field),
            unresolved(&self.wins, HERO_WINS.field),
            unresolved(&self.losses, HERO_LOSSES.field),
            unresolved(&self.draws, HERO_DRAWS.field),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Column labels for the player standings sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingColumns {
    pub player_name: Option<String>,
    pub avatar: Option<String>,
    pub wins: Option<String>,
    pub championships: Option<String>,
    pub last_place: Option<String>,
}

impl StandingColumns {
    /// Avatar is optional and never reported
    pub fn warnings(&self) -> Vec<SheetWarning> {
        [
            unresolved(&self.player_name, PLAYER_NAME.field),
            unresolved(&self.wins, PLAYER_WINS.field),
            unresolved(&self.championships, PLAYER_CHAMPIONSHIPS.field),
            unresolved(&self.last_place, PLAYER_LAST_PLACE.field),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Decide which columns of a hero sheet hold name and W/L/D counts.
///
/// Header aliases win; otherwise the fixed legacy position is used if the
/// row is wide enough. Unresolvable fields stay `None`.
pub fn determine_column_mapping(sample: &SheetRow) -> HeroColumns {
    HeroColumns {
        hero_name: resolve_column(sample, &HERO_NAME),
        wins: resolve_column(sample, &HERO_WINS),
        losses: resolve_column(sample, &HERO_LOSSES),
        draws: resolve_column(sample, &HERO_DRAWS),
    }
}

/// Decide which columns of a standings sheet hold the player counters
pub fn determine_standings_mapping(sample: &SheetRow) -> StandingColumns {
    StandingColumns {
        player_name: resolve_column(sample, &PLAYER_NAME),
        avatar: resolve_column(sample, &PLAYER_AVATAR),
        wins: resolve_column(sample, &PLAYER_WINS),
        championships: resolve_column(sample, &PLAYER_CHAMPIONSHIPS),
        last_place: resolve_column(sample, &PLAYER_LAST_PLACE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::reader::column_letter;
    use crate::sheet::row::CellValue;

    fn lettered_row(cells: &[(usize, CellValue)]) -> SheetRow {
        let width = cells.iter().map(|(i, _)| *i).max().unwrap_or(0) + 1;
        (0..width)
            .map(|col| {
                let value = cells
                    .iter()
                    .find(|(i, _)| *i == col)
                    .map(|(_, v)| v.clone())
                    .unwrap_or(CellValue::Empty);
                (column_letter(col), value)
            })
            .collect()
    }

    #[test]
    fn test_legacy_letter_columns() {
        let row: SheetRow = vec![
            ("D", CellValue::Text("Zed".to_string())),
            ("I", CellValue::Number(10.0)),
            ("J", CellValue::Number(5.0)),
            ("K", CellValue::Number(0.0)),
        ]
        .into_iter()
        .collect();

        let mapping = determine_column_mapping(&row);
        assert_eq!(mapping.hero_name.as_deref(), Some("D"));
        assert_eq!(mapping.wins.as_deref(), Some("I"));
        assert_eq!(mapping.losses.as_deref(), Some("J"));
        assert_eq!(mapping.draws.as_deref(), Some("K"));
        assert!(mapping.warnings().is_empty());
    }

    #[test]
    fn test_chinese_header_aliases() {
        let row: SheetRow = vec![
            ("英雄", CellValue::Text("悟空".to_string())),
            ("胜利", CellValue::Number(3.0)),
            ("失败", CellValue::Number(1.0)),
            ("平局", CellValue::Number(1.0)),
        ]
        .into_iter()
        .collect();

        let mapping = determine_column_mapping(&row);
        assert_eq!(mapping.hero_name.as_deref(), Some("英雄"));
        assert_eq!(mapping.wins.as_deref(), Some("胜利"));
    }

    #[test]
    fn test_positional_fallback_without_headers() {
        let row: SheetRow = (0..11)
            .map(|i| (format!("col{}", i), CellValue::Number(i as f64)))
            .collect();

        let mapping = determine_column_mapping(&row);
        assert_eq!(mapping.hero_name.as_deref(), Some("col3"));
        assert_eq!(mapping.wins.as_deref(), Some("col8"));
        assert_eq!(mapping.losses.as_deref(), Some("col9"));
        assert_eq!(mapping.draws.as_deref(), Some("col10"));
    }

    #[test]
    fn test_narrow_rows_leave_fields_unmapped() {
        let row = lettered_row(&[(3, CellValue::Text("Zed".to_string())), (8, CellValue::Number(1.0))]);
        // Letters D and I are present, J and K are not and the row is too short
        let mapping = determine_column_mapping(&row);
        assert_eq!(mapping.hero_name.as_deref(), Some("D"));
        assert_eq!(mapping.losses, None);
        assert_eq!(mapping.draws, None);
        assert_eq!(
            mapping.warnings(),
            vec![
                SheetWarning::UnresolvedColumn { field: "losses" },
                SheetWarning::UnresolvedColumn { field: "draws" },
            ]
        );
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let row = lettered_row(&[(3, CellValue::Text("Zed".to_string())), (10, CellValue::Number(2.0))]);
        assert_eq!(determine_column_mapping(&row), determine_column_mapping(&row));
        assert_eq!(determine_standings_mapping(&row), determine_standings_mapping(&row));
    }

    #[test]
    fn test_standings_headers() {
        let row: SheetRow = vec![
            ("昵称", CellValue::Text("张三".to_string())),
            ("头像", CellValue::Text("/a.png".to_string())),
            ("胜场数", CellValue::Number(45.0)),
            ("冠军数", CellValue::Number(6.0)),
            ("老八数", CellValue::Number(2.0)),
        ]
        .into_iter()
        .collect();

        let mapping = determine_standings_mapping(&row);
        assert_eq!(mapping.player_name.as_deref(), Some("昵称"));
        assert_eq!(mapping.avatar.as_deref(), Some("头像"));
        assert_eq!(mapping.last_place.as_deref(), Some("老八数"));
        assert!(mapping.warnings().is_empty());
    }

    #[test]
    fn test_standings_avatar_has_no_positional_fallback() {
        let row: SheetRow = (0..5)
            .map(|i| (column_letter(i), CellValue::Number(1.0)))
            .collect();

        let mapping = determine_standings_mapping(&row);
        assert_eq!(mapping.player_name.as_deref(), Some("A"));
        assert_eq!(mapping.avatar, None);
        assert_eq!(mapping.wins.as_deref(), Some("C"));
        assert_eq!(mapping.championships.as_deref(), Some("D"));
        assert_eq!(mapping.last_place.as_deref(), Some("E"));
    }
}
