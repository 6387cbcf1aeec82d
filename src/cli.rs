use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{DemoWindow, Metric, PlayerId, TimeRange, parse_match_date};

#[derive(Parser, Debug)]
#[command(author, version, about = "budokai tournament scoring and rankings")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Bootstrap player statistics from a standings sheet (CSV)
    Import {
        file: PathBuf,
        /// Sheet has no header row; columns are addressed by letter
        #[arg(long)]
        letters: bool,
    },
    /// Record a tournament; player IDs in finishing order, winner first
    Record {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<PlayerId>,
        /// Match date as YYYY-MM-DD (defaults to today)
        #[arg(short, long, value_parser = parse_match_date)]
        date: Option<NaiveDate>,
    },
    /// Show the leaderboard over recorded statistics
    Rank {
        #[arg(short, long, default_value_t = Metric::Points)]
        metric: Metric,
        #[arg(short, long, default_value_t = TimeRange::All)]
        range: TimeRange,
    },
    /// List recorded tournaments, newest first
    History,
    /// List registered players
    Players,
    /// Delete all player statistics and tournament history
    Reset,
    /// Hero win rates from a win-rate sheet
    Winrate {
        file: PathBuf,
        /// Case-insensitive hero name filter
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        letters: bool,
    },
    /// Demo leaderboard straight from a standings sheet
    SheetRank {
        file: PathBuf,
        #[arg(short, long, default_value_t = Metric::Points)]
        metric: Metric,
        #[arg(short, long, default_value_t = DemoWindow::All)]
        window: DemoWindow,
        #[arg(long)]
        letters: bool,
    },
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        #[arg(long)]
        winrate_sheet: Option<PathBuf>,
        #[arg(long)]
        standings_sheet: Option<PathBuf>,
        #[arg(long)]
        letters: bool,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_record_parses_ids_and_date() {
        let command = parse(&["budokai_stats", "record", "3", "1", "2", "--date", "2025-04-10"]);
        assert_eq!(
            command,
            Command::Record {
                ids: vec![3, 1, 2],
                date: NaiveDate::from_ymd_opt(2025, 4, 10),
            }
        );
    }

    #[test]
    fn test_rank_accepts_metric_alias() {
        let command = parse(&["budokai_stats", "rank", "--metric", "laoBa", "--range", "week"]);
        assert_eq!(
            command,
            Command::Rank {
                metric: Metric::LastPlace,
                range: TimeRange::Week,
            }
        );
    }

    #[test]
    fn test_invalid_labels_are_rejected() {
        assert!(Cli::try_parse_from(["budokai_stats", "rank", "--metric", "elo"]).is_err());
        assert!(Cli::try_parse_from(["budokai_stats", "record", "1", "--date", "yesterday"]).is_err());
        assert!(Cli::try_parse_from(["budokai_stats", "record"]).is_err());
    }

    #[test]
    fn test_sheet_rank_defaults() {
        let command = parse(&["budokai_stats", "sheet-rank", "standings.csv"]);
        assert_eq!(
            command,
            Command::SheetRank {
                file: PathBuf::from("standings.csv"),
                metric: Metric::Points,
                window: DemoWindow::All,
                letters: false,
            }
        );
    }
}
