//! Per-round chip bookkeeping for the two seats.
//!
//! Chips only ever move from a player's stack into that player's pot during
//! betting; they leave the pots only at settlement.

use crate::errors::GameError;
use crate::player::Player;

/// Index of the other seat.
pub fn opponent(index: usize) -> usize {
    1 - index
}

/// Move `amount` from the player's stack to their pot.
///
/// Requires `amount <= stack`; an overcommit is rejected and leaves the
/// player unchanged, so stacks can never go negative.
pub fn commit(player: &mut Player, amount: u32) -> Result<(), GameError> {
    player.move_to_pot(amount)
}

/// `opponent.pot - actor.pot`. Negative when the actor is ahead.
pub fn differential(players: &[Player; 2], actor: usize) -> i64 {
    i64::from(players[opponent(actor)].pot()) - i64::from(players[actor].pot())
}

/// Chips the actor still has to put in to match, never below zero.
pub fn amount_owed(players: &[Player; 2], actor: usize) -> u32 {
    u32::try_from(differential(players, actor).max(0)).unwrap_or(u32::MAX)
}

/// Total chips committed by both players this round.
pub fn total(players: &[Player; 2]) -> u32 {
    players[0].pot() + players[1].pot()
}

/// True once both contributions match.
pub fn is_balanced(players: &[Player; 2]) -> bool {
    players[0].pot() == players[1].pot()
}
