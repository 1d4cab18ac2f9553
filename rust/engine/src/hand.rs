//! Hand evaluator collaborator.
//!
//! The betting core only sees [`Score`] values produced through the
//! [`HandEvaluator`] trait; a strictly lower score is a strictly stronger hand.

use std::cmp::Ordering;

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Category plus tiebreak ranks, ordered high to low. Field order makes the
/// derived ordering compare category first.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandStrength {
    pub category: Category,
    pub kickers: [u8; 5],
}

impl HandStrength {
    fn new(category: Category, ranks: &[u8]) -> Self {
        let mut kickers = [0u8; 5];
        for (slot, &r) in kickers.iter_mut().zip(ranks) {
            *slot = r;
        }
        Self { category, kickers }
    }

    /// Packs category and kickers into 24 bits, larger is stronger.
    fn packed(&self) -> u32 {
        self.kickers
            .iter()
            .fold(self.category as u32, |acc, &k| (acc << 4) | k as u32)
    }
}

/// Totally ordered hand score: lower beats higher, equal ties.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Score(pub u32);

const PACKED_MAX: u32 = 0x00FF_FFFF;

impl From<&HandStrength> for Score {
    fn from(strength: &HandStrength) -> Self {
        Score(PACKED_MAX - strength.packed())
    }
}

/// Pure function from a player's hole cards and the revealed board to a score.
pub trait HandEvaluator {
    fn evaluate(&self, hole: &[Card; 2], board: &[Card]) -> Score;
}

/// Best-hand evaluator over any 2..=7 cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, hole: &[Card; 2], board: &[Card]) -> Score {
        let mut cards = Vec::with_capacity(2 + board.len());
        cards.extend_from_slice(hole);
        cards.extend_from_slice(board);
        Score::from(&evaluate_cards(&cards))
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

pub fn evaluate_cards(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask = 0u16;
    for c in cards {
        let r = c.rank.value();
        let s = c.suit.index();
        rank_counts[r as usize] += 1;
        suit_counts[s] += 1;
        suit_masks[s] |= 1 << r;
        rank_mask |= 1 << r;
    }

    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high_from_mask(suit_masks[s]) {
            return HandStrength::new(Category::StraightFlush, &[high]);
        }
    }

    let quads = ranks_with_count(&rank_counts, |c| c == 4);
    if let Some(&q) = quads.first() {
        let kicker = top_ranks(&rank_counts, &[q], 1);
        return HandStrength::new(Category::FourOfAKind, &[q, kicker[0]]);
    }

    let trips = ranks_with_count(&rank_counts, |c| c == 3);
    if let Some(&t) = trips.first() {
        // a second set of trips plays as the pair
        let pair = ranks_with_count(&rank_counts, |c| c >= 2)
            .into_iter()
            .find(|&r| r != t);
        if let Some(p) = pair {
            return HandStrength::new(Category::FullHouse, &[t, p]);
        }
    }

    if let Some(s) = flush_suit {
        let ranks = ranks_in_mask(suit_masks[s]);
        return HandStrength::new(Category::Flush, &ranks[..5]);
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return HandStrength::new(Category::Straight, &[high]);
    }

    if let Some(&t) = trips.first() {
        let mut k = vec![t];
        k.extend(top_ranks(&rank_counts, &[t], 2));
        return HandStrength::new(Category::ThreeOfAKind, &k);
    }

    let pairs = ranks_with_count(&rank_counts, |c| c == 2);
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut k = vec![high, low];
        k.extend(top_ranks(&rank_counts, &[high, low], 1));
        return HandStrength::new(Category::TwoPair, &k);
    }
    if let Some(&p) = pairs.first() {
        let mut k = vec![p];
        k.extend(top_ranks(&rank_counts, &[p], 3));
        return HandStrength::new(Category::OnePair, &k);
    }

    HandStrength::new(Category::HighCard, &top_ranks(&rank_counts, &[], 5))
}

/// Ranks (high to low) whose count satisfies `pred`.
fn ranks_with_count(rank_counts: &[u8; 15], pred: impl Fn(u8) -> bool) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| pred(rank_counts[r as usize]))
        .collect()
}

/// Highest `n` distinct ranks present, skipping `exclude`.
fn top_ranks(rank_counts: &[u8; 15], exclude: &[u8], n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !exclude.contains(r))
        .take(n)
        .collect()
}

fn ranks_in_mask(mask: u16) -> Vec<u8> {
    (2..=14u8).rev().filter(|&r| mask & (1 << r) != 0).collect()
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // ace also plays low
    if m & (1 << 14) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        m & window == window
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    #[test]
    fn wheel_is_five_high() {
        let cards = [
            Card::new(R::Ace, S::Clubs),
            Card::new(R::Two, S::Hearts),
            Card::new(R::Three, S::Spades),
            Card::new(R::Four, S::Diamonds),
            Card::new(R::Five, S::Clubs),
        ];
        let hs = evaluate_cards(&cards);
        assert_eq!(hs.category, Category::Straight);
        assert_eq!(hs.kickers[0], 5);
    }

    #[test]
    fn stronger_hand_gets_lower_score() {
        let pair = HandStrength::new(Category::OnePair, &[2, 14, 13, 12]);
        let high = HandStrength::new(Category::HighCard, &[14, 13, 12, 11, 9]);
        assert!(Score::from(&pair) < Score::from(&high));
    }
}
