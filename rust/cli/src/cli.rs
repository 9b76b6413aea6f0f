//! Command-line surface, parsed with clap derive.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "twentyone",
    version,
    about = "Twenty-One: one player against the dealer, one unit per round"
)]
pub struct TwentyOneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Bankroll overrides shared by commands that run a match.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BankrollArgs {
    /// Starting balance
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,
    /// Ruin floor: the match ends once the balance falls to this value
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,
    /// Cash-out ceiling: the match ends once the balance reaches this value
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive match on the terminal
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        bankroll: BankrollArgs,
    },
    /// Play a match automatically and report the totals
    Sim {
        /// Stop after this many rounds if the bankroll has not ended the match
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Hit while below this total
        #[arg(long, default_value_t = 17)]
        stand_on: u32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        bankroll: BankrollArgs,
    },
    /// Deal one opening hand and show it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
