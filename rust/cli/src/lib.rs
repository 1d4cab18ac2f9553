//! # pokerbots CLI Library
//!
//! Command-line driver for the heads-up engine. The entry point is [`run`],
//! which parses arguments and dispatches to a subcommand:
//!
//! - `sim`: play a game between two policies, optionally recording JSONL hand histories
//! - `cfg`: display the resolved configuration and its sources
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerbots", "sim", "--rounds", "10", "--p1", "call", "--p2", "random"];
//! let code = pokerbots_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, PokerbotsCli};
use commands::{handle_cfg_command, handle_sim_command};

pub use error::CliError;

/// Parses `args` and runs the selected command.
///
/// Returns `0` on success and `2` on any error; help and version output go
/// to `out` with exit code `0`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerbotsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Sim(args) => handle_sim_command(args, out),
        Commands::Cfg => handle_cfg_command(out),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            e.exit_code()
        }
    }
}

/// Whether `-v/--verbose` was passed, for logging setup before [`run`].
pub fn wants_verbose<S: AsRef<str>>(args: &[S]) -> bool {
    args.iter()
        .any(|a| matches!(a.as_ref(), "-v" | "--verbose"))
}
