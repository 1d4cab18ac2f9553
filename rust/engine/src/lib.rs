//! # pokerbots-engine: Heads-up No-Limit Hold'em betting core
//!
//! Simulates complete two-player rounds: blinds, the four streets,
//! per-decision legality, pot accounting under all-in and unequal
//! contributions, and settlement including ties. Cards, shuffling, hand
//! strength and player decisions come from collaborators behind traits.
//!
//! ## Core Modules
//!
//! - [`pot`] - Per-player contribution bookkeeping
//! - [`rules`] - Legal actions for the player to act
//! - [`engine`] - Betting loop for one street
//! - [`game`] - Round orchestration and dealer rotation
//! - [`showdown`] - Pot distribution after a fold or a showdown
//! - [`policy`] - The [`policy::Policy`] trait strategies implement
//! - [`deck`], [`hand`], [`cards`] - Default deck and evaluator collaborators
//! - [`logger`] - JSONL hand history records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerbots_engine::game::Game;
//! use pokerbots_engine::player::{Decision, Player};
//! use pokerbots_engine::policy::{Policy, TableView};
//! use pokerbots_engine::rules::LegalActions;
//!
//! struct Caller;
//!
//! impl Policy for Caller {
//!     fn name(&self) -> &str {
//!         "caller"
//!     }
//!     fn decide(&mut self, legal: &LegalActions, _view: &TableView<'_>) -> Decision {
//!         match legal.call {
//!             Some(amount) => Decision::call(amount),
//!             None => Decision::check(),
//!         }
//!     }
//! }
//!
//! let players = [Player::new("Igor", 1_000), Player::new("Ivan", 1_000)];
//! let mut game = Game::new(players, [Box::new(Caller), Box::new(Caller)], 10).with_seed(7);
//! let summary = game.play_round().expect("round");
//! assert_eq!(summary.stacks_after.iter().sum::<u32>(), 2_000);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod pot;
pub mod rules;
pub mod showdown;
