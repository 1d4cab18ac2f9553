//! The decision seam between the engine and player strategies.

use crate::cards::Card;
use crate::logger::Street;
use crate::player::{Decision, Player};
use crate::rules::LegalActions;

/// Read-only snapshot handed to a policy alongside its legal actions.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub seat: usize,
    pub street: Street,
    pub board: &'a [Card],
    pub hole_cards: Option<&'a [Card; 2]>,
    pub pots: [u32; 2],
    pub stacks: [u32; 2],
}

impl<'a> TableView<'a> {
    pub fn new(players: &'a [Player; 2], seat: usize, street: Street, board: &'a [Card]) -> Self {
        Self {
            seat,
            street,
            board,
            hole_cards: players[seat].hole_cards(),
            pots: [players[0].pot(), players[1].pot()],
            stacks: [players[0].stack(), players[1].stack()],
        }
    }
}

/// A player strategy. The engine enforces which action kinds are on offer;
/// the policy only picks one of them and, for call/raise, the chip amount.
///
/// `decide` is the only point where a round waits on the outside world. An
/// embedding that needs timeouts wraps its policy, the engine never does.
pub trait Policy {
    fn name(&self) -> &str;

    fn decide(&mut self, legal: &LegalActions, view: &TableView<'_>) -> Decision;
}
