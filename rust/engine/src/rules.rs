//! Legal action computation for the player about to act.

use serde::{Deserialize, Serialize};

use crate::player::{ActionKind, Player};

/// Inclusive range of chips a raise may commit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RaiseBounds {
    pub min: u32,
    pub max: u32,
}

/// What the acting player may do. Each kind is either absent or present
/// with its bound data; exactly one of check/call is present whenever the
/// set is non-empty.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegalActions {
    pub fold: bool,
    pub check: bool,
    pub call: Option<u32>,
    pub raise: Option<RaiseBounds>,
}

impl LegalActions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !self.fold && !self.check && self.call.is_none() && self.raise.is_none()
    }

    pub fn offers(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Fold => self.fold,
            ActionKind::Check => self.check,
            ActionKind::Call => self.call.is_some(),
            ActionKind::Raise => self.raise.is_some(),
        }
    }

    /// Offered kinds in a fixed order: fold, check, call, raise.
    pub fn kinds(&self) -> Vec<ActionKind> {
        [
            ActionKind::Fold,
            ActionKind::Check,
            ActionKind::Call,
            ActionKind::Raise,
        ]
        .into_iter()
        .filter(|&k| self.offers(k))
        .collect()
    }
}

/// Computes the legal actions for `actor` facing `enemy_bet` more chips in
/// the opponent's pot than in their own.
///
/// There is no minimum raise increment: a raise may commit anything from
/// the amount owed up to the whole stack. A stack that cannot exceed the
/// bet only gets the (all-in) call.
///
/// # Examples
///
/// ```
/// use pokerbots_engine::player::Player;
/// use pokerbots_engine::rules::{legal_actions, RaiseBounds};
///
/// let short = Player::new("short", 60);
/// let legal = legal_actions(&short, 100);
/// assert!(legal.fold);
/// assert_eq!(legal.call, Some(60));
/// assert_eq!(legal.raise, None);
///
/// let deep = Player::new("deep", 500);
/// let legal = legal_actions(&deep, 0);
/// assert!(legal.check && !legal.fold);
/// assert_eq!(legal.raise, Some(RaiseBounds { min: 0, max: 500 }));
/// ```
pub fn legal_actions(actor: &Player, enemy_bet: u32) -> LegalActions {
    if !actor.can_act() {
        return LegalActions::none();
    }
    let stack = actor.stack();
    let mut legal = LegalActions::none();
    if enemy_bet > 0 {
        legal.fold = true;
        legal.call = Some(stack.min(enemy_bet));
    } else {
        legal.check = true;
    }
    if stack > enemy_bet {
        legal.raise = Some(RaiseBounds {
            min: enemy_bet,
            max: stack,
        });
    }
    legal
}
