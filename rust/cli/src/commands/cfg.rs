//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value with its source:
//!
//! ```json
//! {
//!   "small_blind": {
//!     "value": 10,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "p1": {
            "value": config.p1,
            "source": sources.p1,
        },
        "p2": {
            "value": config.p2,
            "source": sources.p2,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
