//! Pot distribution at the end of a round.
//!
//! Heads-up only: the short-stack refund below stands in for side pots and
//! is correct for exactly two contestants.

use std::cmp::Ordering;

use tracing::debug;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{HandEvaluator, Score};
use crate::player::Player;
use crate::pot;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SettlementKind {
    /// One player folded, the other takes both pots.
    Fold,
    /// Hands were compared and one was strictly better.
    Showdown,
    /// Equal scores; each pot went back to its owner.
    Split,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Settlement {
    pub kind: SettlementKind,
    pub winners: Vec<usize>,
    /// Chips added to each seat's stack.
    pub payouts: [u32; 2],
    /// Contributions at settlement time.
    pub pots: [u32; 2],
    pub scores: Option<[Score; 2]>,
}

impl Settlement {
    /// Unmatched chips handed back to a showdown loser, if any.
    pub fn refunded(&self) -> Option<u32> {
        match (self.kind, self.winners.as_slice()) {
            (SettlementKind::Showdown, [w]) => {
                let loser = pot::opponent(*w);
                (self.payouts[loser] > 0).then_some(self.payouts[loser])
            }
            _ => None,
        }
    }
}

/// Settles the round: decides payouts from the final pots and credits them
/// to the stacks. Pots themselves are left untouched.
pub fn resolve(
    players: &mut [Player; 2],
    board: &[Card],
    evaluator: &dyn HandEvaluator,
) -> Result<Settlement, GameError> {
    let pots = [players[0].pot(), players[1].pot()];
    let settlement = match folded_seat(players) {
        Some(folder) => {
            let winner = pot::opponent(folder);
            let mut payouts = [0; 2];
            payouts[winner] = pots[0] + pots[1];
            Settlement {
                kind: SettlementKind::Fold,
                winners: vec![winner],
                payouts,
                pots,
                scores: None,
            }
        }
        None => {
            let scores = [
                score_of(players, 0, board, evaluator)?,
                score_of(players, 1, board, evaluator)?,
            ];
            match scores[0].cmp(&scores[1]) {
                Ordering::Equal => Settlement {
                    kind: SettlementKind::Split,
                    winners: vec![0, 1],
                    payouts: pots,
                    pots,
                    scores: Some(scores),
                },
                order => {
                    let winner = if order == Ordering::Less { 0 } else { 1 };
                    Settlement {
                        kind: SettlementKind::Showdown,
                        winners: vec![winner],
                        payouts: award(pots, winner),
                        pots,
                        scores: Some(scores),
                    }
                }
            }
        }
    };

    for (player, &chips) in players.iter_mut().zip(settlement.payouts.iter()) {
        player.add_chips(chips);
    }
    debug!(kind = ?settlement.kind, payouts = ?settlement.payouts, "pot settled");
    Ok(settlement)
}

/// Payouts when `winner` has the better hand. A winner who contributed less
/// wins twice their own contribution and the loser gets the unmatched rest.
pub fn award(pots: [u32; 2], winner: usize) -> [u32; 2] {
    let loser = pot::opponent(winner);
    let mut payouts = [0; 2];
    if pots[winner] < pots[loser] {
        payouts[winner] = 2 * pots[winner];
        payouts[loser] = pots[loser] - pots[winner];
    } else {
        payouts[winner] = pots[winner] + pots[loser];
    }
    payouts
}

fn folded_seat(players: &[Player; 2]) -> Option<usize> {
    players.iter().position(|p| p.has_folded())
}

fn score_of(
    players: &[Player; 2],
    seat: usize,
    board: &[Card],
    evaluator: &dyn HandEvaluator,
) -> Result<Score, GameError> {
    let hole = players[seat]
        .hole_cards()
        .ok_or(GameError::MissingHoleCards { player: seat })?;
    Ok(evaluator.evaluate(hole, board))
}
