//! Sim command: a match played by a fixed "hit below N" seat.
//!
//! Useful for exercising the engine end to end without a terminal, and for a
//! quick look at how a bankroll fares over many rounds.

use crate::cli::BankrollArgs;
use crate::config;
use crate::error::CliError;
use crate::ui;
use std::convert::Infallible;
use std::io::Write;
use tracing::info;
use twentyone_engine::engine::TwentyOne;
use twentyone_engine::events::{GameEvent, MatchEnd, MatchSummary};
use twentyone_engine::game::{Decision, TableAdapter, TableView};

/// Hits below `stand_on`, and keeps playing until `max_rounds` are done.
#[derive(Debug, Clone)]
pub struct AutoSeat {
    stand_on: u32,
    max_rounds: u32,
    rounds_done: u32,
}

impl AutoSeat {
    pub fn new(stand_on: u32, max_rounds: u32) -> Self {
        Self {
            stand_on,
            max_rounds,
            rounds_done: 0,
        }
    }
}

impl TableAdapter for AutoSeat {
    type Error = Infallible;

    fn hit_or_stay(&mut self, view: &TableView) -> Result<Decision, Infallible> {
        if view.player_score < self.stand_on {
            Ok(Decision::Hit)
        } else {
            Ok(Decision::Stay)
        }
    }

    fn play_again(&mut self, _balance: i64) -> Result<bool, Infallible> {
        Ok(self.rounds_done < self.max_rounds)
    }

    fn notify(&mut self, event: &GameEvent) -> Result<(), Infallible> {
        if let GameEvent::RoundResult { .. } = event {
            self.rounds_done += 1;
        }
        Ok(())
    }
}

/// Handle the sim command.
///
/// # Errors
///
/// * `CliError::InvalidInput` if `rounds` is zero
/// * `CliError::Config` / `CliError::Engine` for bad configuration
pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    stand_on: u32,
    json: bool,
    bankroll: BankrollArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = config::load()?.with_overrides(seed, bankroll.start, bankroll.min, bankroll.max);
    let bookie = cfg.bookie()?;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let (min_balance, max_balance) = (bookie.min_balance(), bookie.max_balance());

    let mut game = TwentyOne::with_seed(seed, bookie);
    let summary = match game.play_match(&mut AutoSeat::new(stand_on, rounds)) {
        Ok(s) => s,
        Err(never) => match never {},
    };
    info!(seed, rounds = summary.rounds, balance = summary.final_balance, "simulation done");

    if json {
        let display = serde_json::json!({
            "seed": seed,
            "stand_on": stand_on,
            "min_balance": min_balance,
            "max_balance": max_balance,
            "summary": summary,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "sim: seed={} stand_on={}", seed, stand_on)?;
        writeln!(out, "Bankroll bounds: {} < balance < {}", min_balance, max_balance)?;
        write_summary(out, &summary)?;
    }
    Ok(())
}

fn write_summary(out: &mut dyn Write, summary: &MatchSummary) -> Result<(), CliError> {
    let ended = match summary.end {
        Some(MatchEnd::Broke) => "broke",
        Some(MatchEnd::Rich) => "cashed out",
        Some(MatchEnd::Declined) | None => "round limit",
    };
    writeln!(out, "Rounds played: {}", summary.rounds)?;
    writeln!(out, "Player wins: {}", summary.player_wins)?;
    writeln!(out, "Dealer wins: {}", summary.dealer_wins)?;
    writeln!(out, "Ties: {}", summary.ties)?;
    writeln!(out, "Final balance: {}", summary.final_balance)?;
    writeln!(out, "Ended: {}", ended)?;
    Ok(())
}
