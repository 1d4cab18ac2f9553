//! Seat state, action kinds and the decisions policies return.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// The four action kinds a policy may choose from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionKind::Fold),
            "check" => Ok(ActionKind::Check),
            "call" => Ok(ActionKind::Call),
            "raise" => Ok(ActionKind::Raise),
            _ => Err(GameError::UnknownAction(s.to_string())),
        }
    }
}

/// A policy's answer at one decision point. `amount` is ignored for fold
/// and check; for call and raise it is the number of chips to commit now.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: ActionKind,
    pub amount: u32,
}

impl Decision {
    pub fn fold() -> Self {
        Self {
            action: ActionKind::Fold,
            amount: 0,
        }
    }
    pub fn check() -> Self {
        Self {
            action: ActionKind::Check,
            amount: 0,
        }
    }
    pub fn call(amount: u32) -> Self {
        Self {
            action: ActionKind::Call,
            amount,
        }
    }
    pub fn raise(amount: u32) -> Self {
        Self {
            action: ActionKind::Raise,
            amount,
        }
    }
}

/// A seat in a heads-up game. `stack` persists across rounds; `pot`,
/// `folded` and the hole cards only live for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    stack: u32,
    pot: u32,
    folded: bool,
    hole: Option<[Card; 2]>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            pot: 0,
            folded: false,
            hole: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn has_folded(&self) -> bool {
        self.folded
    }
    pub fn hole_cards(&self) -> Option<&[Card; 2]> {
        self.hole.as_ref()
    }

    pub fn is_all_in(&self) -> bool {
        self.stack == 0
    }

    /// Whether this player can still make a decision this round.
    pub fn can_act(&self) -> bool {
        !self.folded && self.stack > 0
    }

    /// Round setup: fresh hole cards, nothing committed, not folded.
    pub fn reset_for_round(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
        self.pot = 0;
        self.folded = false;
    }

    pub fn clear_cards(&mut self) {
        self.hole = None;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    /// Moves chips from stack to pot. Callers clamp to the stack first.
    pub(crate) fn move_to_pot(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                requested: amount,
                stack: self.stack,
            });
        }
        self.stack -= amount;
        self.pot += amount;
        Ok(())
    }

    /// Abandoned round: committed chips go back to the stack.
    pub(crate) fn refund_pot(&mut self) {
        self.stack = self.stack.saturating_add(self.pot);
        self.pot = 0;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
