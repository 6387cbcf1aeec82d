use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::database::{self, DbPool};
use crate::domain::{ImportProgress, PlayerId, PlayerStat};
use crate::errors::SheetWarning;
use crate::scoring::cumulative_points;
use crate::sheet::{self, SheetLayout, SheetRow, SheetStanding};

/// Outcome of a bootstrap import
#[derive(Debug, Default, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub dropped_rows: usize,
    pub warnings: Vec<SheetWarning>,
}

/// One-time bootstrap of player statistics from a standings sheet
pub struct IngestionService {
    pool: DbPool,
    layout: SheetLayout,
}

impl IngestionService {
    pub fn new(pool: DbPool, layout: SheetLayout) -> Self {
        Self { pool, layout }
    }

    pub fn run(&self, path: &Path) -> Result<ImportSummary> {
        info!("=== Starting Player Import ===\n");
        info!("Step 1: Reading sheet {}...", path.display());
        let rows = sheet::read_sheet_file(path, self.layout)?;
        info!("  → Read {} rows\n", rows.len());

        let summary = self.import_rows(&rows)?;

        info!("=== Import Complete ===");
        Ok(summary)
    }

    pub fn import_bytes(&self, bytes: &[u8]) -> Result<ImportSummary> {
        let rows = sheet::read_rows(bytes, self.layout)?;
        self.import_rows(&rows)
    }

    fn import_rows(&self, rows: &[SheetRow]) -> Result<ImportSummary> {
        info!("Step 2: Mapping columns...");
        let projection = sheet::project_standings(rows);
        info!(
            "  → {} usable rows, {} dropped\n",
            projection.rows.len(),
            projection.dropped
        );

        let mut summary = ImportSummary {
            dropped_rows: projection.dropped,
            warnings: projection.warnings.clone(),
            ..ImportSummary::default()
        };
        if projection.is_empty() {
            return Ok(summary);
        }

        info!("Step 3: Registering players...");
        let progress = self.register_players(&projection.rows)?;
        summary.imported = progress.imported();
        summary.skipped = progress.skipped();
        info!(
            "  → {} registered, {} already known\n",
            summary.imported, summary.skipped
        );

        Ok(summary)
    }

    fn register_players(&self, standings: &[SheetStanding]) -> Result<ImportProgress> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction()
            .context("Failed to start import transaction")?;

        let mut stats = database::load_player_stats(&tx)?;
        let mut progress = ImportProgress::new(standings.len());

        for standing in standings {
            if stats.find_by_name(&standing.name).is_some() {
                debug!("Player '{}' already registered, skipping", standing.name);
                progress.increment_skipped();
                continue;
            }

            let id = database::allocate_player_id(&tx, &stats)?;
            stats.add(bootstrap_player(id, standing));
            progress.increment_imported();
        }

        database::save_player_stats(&tx, &stats)?;
        tx.commit().context("Failed to commit import")?;
        Ok(progress)
    }
}

fn bootstrap_player(id: PlayerId, standing: &SheetStanding) -> PlayerStat {
    let mut player = PlayerStat::new(id, standing.name.clone());
    player.avatar = standing.avatar.clone();
    player.championships = standing.championships;
    player.wins = standing.wins;
    player.last_place = standing.last_place;
    player.points = cumulative_points(standing.championships, standing.wins, standing.last_place);
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;
    use std::fs;
    use tempfile::TempDir;

    const STANDINGS: &str = "昵称,头像,胜场数,冠军数,老八数\n张三,/a.png,45,6,2\n李四,,38,8,1\n,,1,1,1\n";

    fn load(pool: &DbPool) -> Vec<PlayerStat> {
        let conn = database::get_connection(pool).unwrap();
        database::load_player_stats(&conn).unwrap().into_vec()
    }

    #[test]
    fn test_import_bootstraps_players() {
        let pool = create_memory_pool().unwrap();
        let service = IngestionService::new(pool.clone(), SheetLayout::Headed);

        let summary = service.import_bytes(STANDINGS.as_bytes()).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.dropped_rows, 1);
        assert!(summary.warnings.is_empty());

        let players = load(&pool);
        assert_eq!(players[0].id, 1);
        assert_eq!(players[0].name, "张三");
        assert_eq!(players[0].points, 6 * 20 + 45 * 10 - 2 * 5);
        assert_eq!(players[0].avatar.as_deref(), Some("/a.png"));
        assert!(players[0].monthly_data.is_empty());
        assert_eq!(players[1].id, 2);
    }

    #[test]
    fn test_reimport_keeps_existing_ids() {
        let pool = create_memory_pool().unwrap();
        let service = IngestionService::new(pool.clone(), SheetLayout::Headed);
        service.import_bytes(STANDINGS.as_bytes()).unwrap();

        let more = "昵称,胜场数\n李四,99\n王五,3\n";
        let summary = service.import_bytes(more.as_bytes()).unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 1);

        let players = load(&pool);
        assert_eq!(players.len(), 3);
        assert_eq!(players[1].wins, 38);
        assert_eq!(players[2].name, "王五");
        assert_eq!(players[2].id, 3);
    }

    #[test]
    fn test_empty_sheet_reports_warning() {
        let pool = create_memory_pool().unwrap();
        let service = IngestionService::new(pool.clone(), SheetLayout::Headed);

        let summary = service.import_bytes("昵称,胜场数\n".as_bytes()).unwrap();
        assert_eq!(summary.imported, 0);
        assert_eq!(summary.warnings, vec![SheetWarning::EmptyResult]);
        assert!(load(&pool).is_empty());
    }

    #[test]
    fn test_run_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("standings.csv");
        fs::write(&path, STANDINGS).unwrap();

        let pool = create_memory_pool().unwrap();
        let summary = IngestionService::new(pool, SheetLayout::Headed).run(&path).unwrap();
        assert_eq!(summary.imported, 2);
    }
}
