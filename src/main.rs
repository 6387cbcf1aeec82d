use anyhow::Result;

use budokai_stats::cli::Command;
use budokai_stats::{
    handle_completions, handle_history, handle_import, handle_players, handle_rank, handle_record,
    handle_reset, handle_serve, handle_sheet_rank, handle_winrate, interpret, layout_for,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Import { file, letters } => handle_import(file, layout_for(*letters)),
        Command::Record { ids, date } => handle_record(ids, *date),
        Command::Rank { metric, range } => handle_rank(*metric, *range),
        Command::History => handle_history(),
        Command::Players => handle_players(),
        Command::Reset => handle_reset(),
        Command::Winrate {
            file,
            search,
            letters,
        } => handle_winrate(file, search.as_deref(), layout_for(*letters)),
        Command::SheetRank {
            file,
            metric,
            window,
            letters,
        } => handle_sheet_rank(file, *metric, *window, layout_for(*letters)),
        Command::Serve {
            port,
            winrate_sheet,
            standings_sheet,
            letters,
        } => handle_serve(
            *port,
            winrate_sheet.clone(),
            standings_sheet.clone(),
            layout_for(*letters),
        ),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
