//! Deal command: one opening deal, as the player would see it.

use crate::error::CliError;
use crate::formatters::render_event;
use std::convert::Infallible;
use std::io::Write;
use twentyone_engine::bookie::Bookie;
use twentyone_engine::engine::TwentyOne;
use twentyone_engine::events::GameEvent;
use twentyone_engine::game::{Decision, RoundState, TableAdapter, TableView};

/// Watches the opening deal; never gets asked to act.
#[derive(Default)]
struct Spectator {
    events: Vec<GameEvent>,
}

impl TableAdapter for Spectator {
    type Error = Infallible;

    fn hit_or_stay(&mut self, _view: &TableView) -> Result<Decision, Infallible> {
        Ok(Decision::Stay)
    }

    fn play_again(&mut self, _balance: i64) -> Result<bool, Infallible> {
        Ok(false)
    }

    fn notify(&mut self, event: &GameEvent) -> Result<(), Infallible> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Handle the deal command.
///
/// Runs the engine through `RoundStart` and `Deal` only and prints the
/// opening hands with the dealer's first card face down.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let mut game = match seed {
        Some(seed) => TwentyOne::with_seed(seed, Bookie::default()),
        None => TwentyOne::from_entropy(Bookie::default()),
    };
    let mut spectator = Spectator::default();
    while game.state() != RoundState::PlayerTurn {
        match game.step(&mut spectator) {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
    for event in &spectator.events {
        for line in render_event(event) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
