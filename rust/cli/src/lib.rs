//! # TwentyOne CLI Library
//!
//! Terminal front end for the `twentyone-engine` round engine. Everything the
//! engine leaves to an adapter lives here: prompting, validating and
//! reprompting input, rendering display events, configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand.
//!
//! ```
//! use std::io;
//! let args = vec!["twentyone", "deal", "--seed", "42"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive match on the terminal
//! - `sim`: Automatic match with a fixed hit-below-N seat
//! - `deal`: Show one opening deal
//! - `cfg`: Display current configuration settings

use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use clap::Parser;
use cli::{Commands, TwentyOneCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};

pub use commands::play::ConsoleSeat;
pub use commands::sim::AutoSeat;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TwentyOneCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: twentyone <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: twentyone --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play { seed, bankroll } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, bankroll, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            seed,
            stand_on,
            json,
            bankroll,
        } => handle_sim_command(rounds, seed, stand_on, json, bankroll, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
