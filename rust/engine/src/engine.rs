//! Betting loop for a single street.

use tracing::{debug, info};

use crate::cards::Card;
use crate::errors::GameError;
use crate::logger::{ActionRecord, Street};
use crate::player::{ActionKind, Player};
use crate::policy::{Policy, TableView};
use crate::pot;
use crate::rules::legal_actions;

/// How a street ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StreetOutcome {
    /// Contributions matched, or a player is all-in.
    Settled,
    /// A player folded; the round goes straight to settlement.
    FoldEnded,
}

impl StreetOutcome {
    /// `1` when ended by a fold, `0` otherwise.
    pub fn as_code(self) -> u8 {
        match self {
            StreetOutcome::Settled => 0,
            StreetOutcome::FoldEnded => 1,
        }
    }

    pub fn ended_by_fold(self) -> bool {
        self == StreetOutcome::FoldEnded
    }
}

/// Runs one street until contributions are equal, a stack is empty, or a
/// player folds.
///
/// The non-dealer acts before the dealer on every street, preflop included.
/// The loop condition is only re-checked after both seats have had their
/// turn, so the dealer still acts after the non-dealer evens the pots.
/// A street entered with equal pots sees no action at all.
///
/// Call and raise amounts are committed as returned by the policy. An action
/// kind that was not offered aborts the street with
/// [`GameError::ActionNotOffered`].
pub fn play_street(
    players: &mut [Player; 2],
    policies: &mut [Box<dyn Policy>; 2],
    dealer: usize,
    street: Street,
    board: &[Card],
    actions: &mut Vec<ActionRecord>,
) -> Result<StreetOutcome, GameError> {
    let order = [pot::opponent(dealer), dealer];
    while !pot::is_balanced(players) && players.iter().all(|p| p.stack() > 0) {
        for seat in order {
            let legal = legal_actions(&players[seat], pot::amount_owed(players, seat));
            if legal.is_empty() {
                continue;
            }
            let decision = {
                let view = TableView::new(players, seat, street, board);
                policies[seat].decide(&legal, &view)
            };
            if !legal.offers(decision.action) {
                return Err(GameError::ActionNotOffered {
                    player: seat,
                    action: decision.action,
                });
            }

            let committed = match decision.action {
                ActionKind::Fold => 0,
                ActionKind::Check => 0,
                ActionKind::Call | ActionKind::Raise => {
                    pot::commit(&mut players[seat], decision.amount)?;
                    decision.amount
                }
            };
            actions.push(ActionRecord {
                player: seat,
                street,
                action: decision.action,
                amount: committed,
            });

            if decision.action == ActionKind::Fold {
                players[seat].fold();
                info!(player = players[seat].name(), %street, "player folds");
                return Ok(StreetOutcome::FoldEnded);
            }
            debug!(
                player = players[seat].name(),
                %street,
                action = %decision.action,
                amount = committed,
                pot = players[seat].pot(),
                "action applied"
            );
        }
    }
    Ok(StreetOutcome::Settled)
}
