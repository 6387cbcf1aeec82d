use std::path::Path;

use anyhow::Result;
use log::info;

use crate::cache::{FileIdentity, SheetCache};
use crate::domain::{DemoWindow, Metric, RankingEntry};
use crate::ranking::build_demo_ranking;
use crate::sheet::{self, HeroRecord, Projection, SheetLayout, SheetStanding};

/// Spreadsheet views: hero win rates and the demo standings leaderboard
pub struct SheetService {
    layout: SheetLayout,
    heroes: SheetCache<HeroRecord>,
    standings: SheetCache<SheetStanding>,
}

impl SheetService {
    pub fn new(layout: SheetLayout) -> Self {
        Self {
            layout,
            heroes: SheetCache::new(),
            standings: SheetCache::new(),
        }
    }

    /// Heroes sorted by win rate, optionally filtered by name
    pub fn hero_win_rates(&mut self, path: &Path, search: Option<&str>) -> Result<Projection<HeroRecord>> {
        let mut projection = self.load_heroes(path)?;
        if let Some(query) = search {
            projection.rows = sheet::filter_heroes(&projection.rows, query);
        }
        Ok(projection)
    }

    pub fn demo_ranking(
        &mut self,
        path: &Path,
        metric: Metric,
        window: DemoWindow,
    ) -> Result<Projection<RankingEntry>> {
        let standings = self.load_standings(path)?;
        Ok(Projection {
            rows: build_demo_ranking(&standings.rows, metric, window),
            dropped: standings.dropped,
            warnings: standings.warnings,
        })
    }

    /// Forget cached projections of `path`, e.g. after it was replaced
    pub fn invalidate(&mut self, path: &Path) -> usize {
        self.heroes.invalidate(path) + self.standings.invalidate(path)
    }

    fn load_heroes(&mut self, path: &Path) -> Result<Projection<HeroRecord>> {
        let layout = self.layout;
        let identity = FileIdentity::for_path(path, layout)?;
        self.heroes.get_or_try_insert(identity, || {
            info!("Processing hero sheet {}", path.display());
            let rows = sheet::read_sheet_file(path, layout)?;
            let mut projection = sheet::project_heroes(&rows);
            sheet::sort_by_win_rate(&mut projection.rows);
            Ok(projection)
        })
    }

    fn load_standings(&mut self, path: &Path) -> Result<Projection<SheetStanding>> {
        let layout = self.layout;
        let identity = FileIdentity::for_path(path, layout)?;
        self.standings.get_or_try_insert(identity, || {
            info!("Processing standings sheet {}", path.display());
            let rows = sheet::read_sheet_file(path, layout)?;
            Ok(sheet::project_standings(&rows))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEROES: &str = "英雄名称,胜场,失败,平局\n艾希,6,4,0\n盖伦,9,1,0\n亚索,3,3,2\n";
    const STANDINGS: &str = "昵称,胜场数,冠军数,老八数\nA,10,1,0\nB,20,4,1\nC,5,0,3\nD,1,0,0\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_hero_win_rates_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "heroes.csv", HEROES);
        let mut service = SheetService::new(SheetLayout::Headed);

        let all = service.hero_win_rates(&path, None).unwrap();
        let names: Vec<&str> = all.rows.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["盖伦", "艾希", "亚索"]);
        assert_eq!(all.rows[0].win_rate_label(), "90.00");

        let filtered = service.hero_win_rates(&path, Some("亚")).unwrap();
        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(filtered.rows[0].total_games, 8);
    }

    #[test]
    fn test_replaced_sheet_is_reprocessed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "heroes.csv", HEROES);
        let mut service = SheetService::new(SheetLayout::Headed);
        assert_eq!(service.hero_win_rates(&path, None).unwrap().rows.len(), 3);

        fs::write(&path, "英雄名称,胜场,失败,平局\n艾希,1,0,0\n").unwrap();
        assert_eq!(service.invalidate(&path), 1);
        assert_eq!(service.hero_win_rates(&path, None).unwrap().rows.len(), 1);
    }

    #[test]
    fn test_demo_ranking_day_window() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "standings.csv", STANDINGS);
        let mut service = SheetService::new(SheetLayout::Headed);

        let board = service
            .demo_ranking(&path, Metric::Championships, DemoWindow::Day)
            .unwrap();
        let summary: Vec<(usize, u32, i64)> = board.rows.iter().map(|e| (e.rank, e.id, e.score)).collect();
        assert_eq!(summary, vec![(1, 2, 1), (2, 1, 1), (3, 3, 0)]);
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut service = SheetService::new(SheetLayout::Headed);
        assert!(service.hero_win_rates(&dir.path().join("none.csv"), None).is_err());
    }
}
