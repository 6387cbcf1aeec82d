use colored::*;

use crate::domain::{MatchRecord, PlayerStat, RankingEntry};
use crate::errors::SheetWarning;
use crate::services::ingestion::ImportSummary;
use crate::sheet::HeroRecord;

fn podium(rank: usize, text: String) -> ColoredString {
    match rank {
        1 => text.yellow().bold(),
        2 => text.white().bold(),
        3 => text.truecolor(205, 127, 50).bold(),
        _ => text.normal(),
    }
}

pub fn format_entry(entry: &RankingEntry) -> String {
    let line = format!("{:>3}. {:<20} {:>6}", entry.rank, entry.name, entry.score);
    podium(entry.rank, line).to_string()
}

pub fn print_leaderboard(title: &str, entries: &[RankingEntry]) {
    println!("{}", title.cyan().bold());
    if entries.is_empty() {
        println!("  {}", "No players yet".dimmed());
        return;
    }
    for entry in entries {
        println!("{}", format_entry(entry));
    }
}

pub fn print_history(history: &[MatchRecord]) {
    if history.is_empty() {
        println!("{}", "No tournaments recorded".dimmed());
        return;
    }
    for record in history {
        println!(
            "{} {} ({} players)",
            record.date.to_string().bold(),
            format!("#{}", record.id).dimmed(),
            record.participant_count
        );
        for result in &record.results {
            let line = format!("    {}. {:<20} +{}", result.rank, result.name, result.points);
            println!("{}", podium(result.rank as usize, line));
        }
    }
}

pub fn print_players(players: &[PlayerStat]) {
    println!(
        "{}",
        format!(
            "{:>4}  {:<20} {:>6} {:>6} {:>6} {:>7}",
            "ID", "Name", "Champ", "Wins", "Last", "Points"
        )
        .bold()
    );
    for player in players {
        println!(
            "{:>4}  {:<20} {:>6} {:>6} {:>6} {:>7}",
            player.id, player.name, player.championships, player.wins, player.last_place, player.points
        );
    }
}

pub fn print_heroes(heroes: &[HeroRecord]) {
    println!(
        "{}",
        format!("{:<20} {:>5} {:>5} {:>5} {:>8}", "Hero", "W", "L", "D", "Win %").bold()
    );
    for hero in heroes {
        println!(
            "{:<20} {:>5} {:>5} {:>5} {:>8}",
            hero.name,
            hero.wins,
            hero.losses,
            hero.draws,
            hero.win_rate_label().green()
        );
    }
}

pub fn print_import_summary(summary: &ImportSummary) {
    println!(
        "{} {} imported, {} already registered, {} rows dropped",
        "Import finished:".green().bold(),
        summary.imported,
        summary.skipped,
        summary.dropped_rows
    );
    print_warnings(&summary.warnings);
}

pub fn print_warnings(warnings: &[SheetWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_keeps_fields() {
        let entry = RankingEntry {
            rank: 4,
            id: 7,
            name: "张三".to_string(),
            avatar: String::new(),
            score: 120,
        };
        let line = format_entry(&entry);
        assert!(line.contains("4."));
        assert!(line.contains("张三"));
        assert!(line.contains("120"));
    }
}
