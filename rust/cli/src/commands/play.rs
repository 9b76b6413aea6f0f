//! # Play Command
//!
//! Interactive Twenty-One on the terminal. [`ConsoleSeat`] is the engine's
//! adapter: it prompts, reprompts on anything that is not a valid answer,
//! and prints every display event. `q`/`quit` or closing stdin walks away
//! from the table.

use crate::cli::BankrollArgs;
use crate::config;
use crate::error::CliError;
use crate::formatters::render_event;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_hit_or_stay, parse_play_again};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use twentyone_engine::engine::TwentyOne;
use twentyone_engine::events::GameEvent;
use twentyone_engine::game::{Decision, TableAdapter, TableView};

pub const HIT_OR_STAY_PROMPT: &str = "Hit or stay? [h/s]: ";
pub const PLAY_AGAIN_PROMPT: &str = "Play again? [y/n]: ";

/// A human at the terminal.
pub struct ConsoleSeat<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> ConsoleSeat<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// Prompt until `parse` accepts a line.
    fn ask<T>(
        &mut self,
        prompt: &str,
        reprompt: &str,
        parse: fn(&str) -> ParseResult<T>,
    ) -> Result<T, CliError> {
        loop {
            ui::prompt(self.out, prompt)?;
            let Some(line) = read_stdin_line(self.input) else {
                return Err(CliError::Interrupted("input closed".into()));
            };
            match parse(&line) {
                ParseResult::Answer(answer) => return Ok(answer),
                ParseResult::Quit => return Err(CliError::Interrupted("player quit".into())),
                ParseResult::Invalid(msg) => {
                    debug!(%msg, "rejected input");
                    writeln!(self.out, "{}", reprompt)?;
                }
            }
        }
    }
}

impl TableAdapter for ConsoleSeat<'_> {
    type Error = CliError;

    fn hit_or_stay(&mut self, _view: &TableView) -> Result<Decision, CliError> {
        self.ask(
            HIT_OR_STAY_PROMPT,
            "Please enter 'h' (hit) or 's' (stay).",
            parse_hit_or_stay,
        )
    }

    fn play_again(&mut self, _balance: i64) -> Result<bool, CliError> {
        self.ask(PLAY_AGAIN_PROMPT, "Please enter 'y' or 'n'.", parse_play_again)
    }

    fn notify(&mut self, event: &GameEvent) -> Result<(), CliError> {
        for line in render_event(event) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

/// Handle the play command: an interactive match read from `stdin`.
///
/// Configuration is resolved from file and environment first; `seed` and the
/// bankroll flags override it.
///
/// # Errors
///
/// * `CliError::Config` if the configuration cannot be loaded
/// * `CliError::Engine` if the bankroll bounds are inverted
/// * `CliError::Io` if writing output fails
pub fn handle_play_command(
    seed: Option<u64>,
    bankroll: BankrollArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c.with_overrides(seed, bankroll.start, bankroll.min, bankroll.max),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let bookie = cfg.bookie()?;
    info!(seed = ?cfg.seed, balance = bookie.balance(), "starting interactive match");

    let mut game = match cfg.seed {
        Some(seed) => TwentyOne::with_seed(seed, bookie),
        None => TwentyOne::from_entropy(bookie),
    };
    let result = game.play_match(&mut ConsoleSeat::new(stdin, out));
    match result {
        Ok(summary) => {
            debug!(rounds = summary.rounds, end = ?summary.end, "match complete");
            Ok(())
        }
        Err(CliError::Interrupted(reason)) => {
            info!(%reason, rounds = game.summary().rounds, "player left the table");
            writeln!(out)?;
            writeln!(out, "Thanks for playing! Goodbye!")?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str, seed: u64) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            Some(seed),
            BankrollArgs::default(),
            &mut out,
            &mut err,
            &mut stdin,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn stay_then_decline_plays_one_round() {
        let (result, output) = play("s\nn\n", 42);
        assert!(result.is_ok());
        assert!(output.starts_with("Welcome to TwentyOne!"));
        assert!(output.contains("Round 1"));
        assert!(output.contains("Final hands:"));
        assert!(output.contains("Bank: $"));
        assert!(output.contains("Thanks for playing! Goodbye!"));
        assert!(!output.contains("Round 2"));
    }

    #[test]
    fn invalid_answer_is_reprompted() {
        let (result, output) = play("double\ns\nmaybe\nn\n", 42);
        assert!(result.is_ok());
        assert!(output.contains("Please enter 'h' (hit) or 's' (stay)."));
        assert!(output.contains("Please enter 'y' or 'n'."));
        assert_eq!(output.matches("Round 1").count(), 1);
    }

    #[test]
    fn quit_leaves_politely() {
        let (result, output) = play("q\n", 7);
        assert!(result.is_ok());
        assert!(output.contains("Thanks for playing! Goodbye!"));
        assert!(!output.contains("Final hands:"));
    }

    #[test]
    fn closed_input_leaves_politely() {
        let (result, output) = play("", 7);
        assert!(result.is_ok());
        assert!(output.contains("Goodbye"));
    }

    #[test]
    fn console_seat_renders_events() {
        let mut out = Vec::new();
        let mut input = Cursor::new(Vec::new());
        let mut seat = ConsoleSeat::new(&mut input, &mut out);
        seat.notify(&GameEvent::Balance { balance: 3 }).unwrap();
        drop(seat);
        assert_eq!(String::from_utf8(out).unwrap(), "Bank: $3\n");
    }
}
