use anyhow::Result;

use season_forecast::cli::Command;
use season_forecast::{handle_project, handle_rank, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
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
        Command::Rank { year } => handle_rank(*year),
        Command::Project {
            year,
            trials,
            seed,
        } => handle_project(*year, *trials, *seed),
    }
}
