use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "season-forecast league projector")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Estimate ratings and print the current ranking
    Rank {
        /// Season year
        #[arg(short, long, default_value_t = 2022)]
        year: u16,
    },
    /// Estimate ratings and project final standings
    Project {
        /// Season year
        #[arg(short, long, default_value_t = 2022)]
        year: u16,
        /// Number of Monte Carlo trials (optional, defaults to 100)
        #[arg(short, long)]
        trials: Option<usize>,
        /// Base seed for the trial generators
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
