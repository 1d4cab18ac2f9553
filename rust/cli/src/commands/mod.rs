//! Command handler modules for the pokerbots CLI.
//!
//! Each handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`; [`crate::run`] maps the result to an exit code.

pub mod cfg;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use sim::handle_sim_command;
