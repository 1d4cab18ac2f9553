use thiserror::Error;

use crate::player::ActionKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown action: {0}. Valid actions are [fold, check, call, raise]")]
    UnknownAction(String),
    #[error("Player {player} chose {action}, which was not offered")]
    ActionNotOffered { player: usize, action: ActionKind },
    #[error("Insufficient chips: requested {requested}, stack {stack}")]
    InsufficientChips { requested: u32, stack: u32 },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Player {player} has no hole cards to show down")]
    MissingHoleCards { player: usize },
    #[error("Player {player} has no chips left")]
    PlayerBusted { player: usize },
    #[error("Chips in play exceed {limit}: stacks {stacks:?}, small blind {small_blind}")]
    ChipOverflow {
        stacks: [u32; 2],
        small_blind: u32,
        limit: u32,
    },
}
