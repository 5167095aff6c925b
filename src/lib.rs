pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod providers;
pub mod rating;
pub mod services;
pub mod simulation;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::ProjectionService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(year: u16) -> Result<()> {
    let config = AppConfig::new();
    let service = ProjectionService::new(config);
    service.run_rankings(year)
}

pub fn handle_project(year: u16, trials: Option<usize>, seed: Option<u64>) -> Result<()> {
    let config = AppConfig::new();
    let service = ProjectionService::new(config);
    service.run_projection(year, trials, seed)
}
