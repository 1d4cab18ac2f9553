//! Deck collaborator: produces freshly shuffled decks and draws cards
//! without replacement.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A shuffled deck supporting draws without replacement.
pub trait Deck {
    /// Draw `n` cards from the top. Fails without drawing anything when
    /// fewer than `n` cards remain.
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError>;

    fn remaining(&self) -> usize;
}

/// Source of a fresh shuffled deck for every round.
pub trait DeckProvider {
    fn new_shuffled_deck(&mut self) -> Box<dyn Deck>;
}

#[derive(Debug, Clone)]
pub struct ShuffledDeck {
    cards: Vec<Card>,
    position: usize,
}

impl ShuffledDeck {
    /// Wrap an already ordered card sequence. Useful for stacking a deck in tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }
}

impl Deck for ShuffledDeck {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Deterministic provider: the same seed yields the same sequence of decks.
#[derive(Debug)]
pub struct SeededDeckProvider {
    rng: ChaCha20Rng,
}

impl SeededDeckProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl DeckProvider for SeededDeckProvider {
    fn new_shuffled_deck(&mut self) -> Box<dyn Deck> {
        let mut cards = full_deck();
        cards.shuffle(&mut self.rng);
        Box::new(ShuffledDeck::from_cards(cards))
    }
}
