pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod ranking;
pub mod scoring;
pub mod services;
pub mod sheet;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::*;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::DbPool;
use crate::domain::{DemoWindow, Metric, PlayerId, TimeRange};
use crate::services::ingestion::IngestionService;
use crate::services::recording::RecordingService;
use crate::services::server::ServerService;
use crate::services::sheets::SheetService;
use crate::services::standings::StandingsService;
use crate::sheet::SheetLayout;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn layout_for(letters: bool) -> SheetLayout {
    if letters {
        SheetLayout::Lettered
    } else {
        SheetLayout::Headed
    }
}

fn open_pool(config: &AppConfig) -> Result<DbPool> {
    database::create_pool(&config.storage.database_path)
}

pub fn handle_import(file: &Path, layout: SheetLayout) -> Result<()> {
    let config = AppConfig::new();
    let service = IngestionService::new(open_pool(&config)?, layout);
    let summary = service.run(file)?;
    output::print_import_summary(&summary);
    Ok(())
}

pub fn handle_record(ids: &[PlayerId], date: Option<NaiveDate>) -> Result<()> {
    let config = AppConfig::new();
    let service = RecordingService::new(open_pool(&config)?, config.scoring.clone());
    let record = service.record(ids, date)?;
    output::print_history(std::slice::from_ref(&record));
    Ok(())
}

pub fn handle_rank(metric: Metric, range: TimeRange) -> Result<()> {
    let config = AppConfig::new();
    let service = StandingsService::new(open_pool(&config)?);
    let entries = service.leaderboard(metric, range)?;
    output::print_leaderboard(&format!("Leaderboard by {} ({})", metric, range), &entries);
    Ok(())
}

pub fn handle_history() -> Result<()> {
    let config = AppConfig::new();
    let service = StandingsService::new(open_pool(&config)?);
    output::print_history(&service.history()?);
    Ok(())
}

pub fn handle_players() -> Result<()> {
    let config = AppConfig::new();
    let service = StandingsService::new(open_pool(&config)?);
    output::print_players(&service.players()?);
    Ok(())
}

pub fn handle_reset() -> Result<()> {
    let config = AppConfig::new();
    let service = StandingsService::new(open_pool(&config)?);
    service.reset()?;
    println!("{}", "All player statistics and tournament history deleted".red().bold());
    Ok(())
}

pub fn handle_winrate(file: &Path, search: Option<&str>, layout: SheetLayout) -> Result<()> {
    let mut service = SheetService::new(layout);
    let projection = service.hero_win_rates(file, search)?;
    output::print_warnings(&projection.warnings);
    output::print_heroes(&projection.rows);
    Ok(())
}

pub fn handle_sheet_rank(
    file: &Path,
    metric: Metric,
    window: DemoWindow,
    layout: SheetLayout,
) -> Result<()> {
    let mut service = SheetService::new(layout);
    let board = service.demo_ranking(file, metric, window)?;
    output::print_warnings(&board.warnings);
    output::print_leaderboard(&format!("Sheet leaderboard by {} ({})", metric, window), &board.rows);
    Ok(())
}

pub fn handle_serve(
    port: u16,
    winrate_sheet: Option<PathBuf>,
    standings_sheet: Option<PathBuf>,
    layout: SheetLayout,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut config = AppConfig::new();
        config.server.winrate_sheet = winrate_sheet;
        config.server.standings_sheet = standings_sheet;
        config.server.sheet_layout = layout;
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
