//! Simulation command: plays a heads-up game between two policies.
//!
//! Rounds are played one at a time until `--rounds` is reached or a player
//! has no chips left. With `--output`, every round is appended to a JSONL
//! hand history.

use crate::cli::SimArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use pokerbots_ai::create_policy;
use pokerbots_engine::game::Game;
use pokerbots_engine::logger::{HandLogger, HandRecord};
use pokerbots_engine::player::Player;
use std::io::Write;

/// Seat names used in output and hand records.
pub const SEAT_NAMES: [&str; 2] = ["P1", "P2"];

pub fn handle_sim_command(args: SimArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = resolve(&args)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let players = [
        Player::new(SEAT_NAMES[0], cfg.starting_stack),
        Player::new(SEAT_NAMES[1], cfg.starting_stack),
    ];
    let policies = [
        create_policy(&cfg.p1, Some(seed.wrapping_add(1)))?,
        create_policy(&cfg.p2, Some(seed.wrapping_add(2)))?,
    ];
    let mut game = Game::new(players, policies, cfg.small_blind).with_seed(seed);
    let mut logger = args.output.as_ref().map(HandLogger::create).transpose()?;

    writeln!(
        out,
        "Seed: {} | {} ({}) vs {} ({}) | blinds {}/{}",
        seed,
        SEAT_NAMES[0],
        cfg.p1,
        SEAT_NAMES[1],
        cfg.p2,
        game.small_blind(),
        game.big_blind()
    )?;

    let mut played = 0u32;
    while played < cfg.rounds && !game.is_over() {
        let summary = game.play_round()?;
        played += 1;
        writeln!(out, "{}", ui::round_line(&summary, game.players()))?;
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&HandRecord::from_summary(id, Some(seed), SEAT_NAMES, &summary))?;
        }
    }

    writeln!(out, "Simulated: {} rounds", played)?;
    for p in game.players() {
        writeln!(out, "{} stack: {}", p.name(), p.stack())?;
    }
    if let Some(winner) = game.winner() {
        writeln!(out, "{} won the game", winner.name())?;
    }
    Ok(())
}

/// Config file and environment, then command-line flags on top.
fn resolve(args: &SimArgs) -> Result<Config, CliError> {
    let mut cfg = config::load_with_sources()?.config;
    if let Some(v) = args.rounds {
        cfg.rounds = v;
    }
    if let Some(v) = args.seed {
        cfg.seed = Some(v);
    }
    if let Some(v) = args.small_blind {
        cfg.small_blind = v;
    }
    if let Some(v) = args.stack {
        cfg.starting_stack = v;
    }
    if let Some(v) = &args.p1 {
        cfg.p1 = v.clone();
    }
    if let Some(v) = &args.p2 {
        cfg.p2 = v.clone();
    }
    config::validate(&cfg).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    Ok(cfg)
}
