//! Command-line definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokerbots",
    version,
    about = "Heads-up No-Limit Hold'em bot simulator"
)]
pub struct PokerbotsCli {
    /// Log engine events (folds, round results) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game between two policies
    Sim(SimArgs),
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Flags override the configuration file and environment.
#[derive(Args, Debug, Default, Clone)]
pub struct SimArgs {
    /// Maximum number of rounds; the game stops earlier when a player busts
    #[arg(long)]
    pub rounds: Option<u32>,
    /// Seed for shuffling and random policies
    #[arg(long)]
    pub seed: Option<u64>,
    /// Small blind; the big blind is twice this
    #[arg(long)]
    pub small_blind: Option<u32>,
    /// Starting stack for both players
    #[arg(long)]
    pub stack: Option<u32>,
    /// Policy for seat 1 (call, random)
    #[arg(long)]
    pub p1: Option<String>,
    /// Policy for seat 2 (call, random)
    #[arg(long)]
    pub p2: Option<String>,
    /// Write one JSON hand record per round to this file
    #[arg(long)]
    pub output: Option<String>,
}
