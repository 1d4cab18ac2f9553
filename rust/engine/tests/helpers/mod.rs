#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use pokerbots_engine::cards::{full_deck, Card, Rank, Suit};
use pokerbots_engine::deck::{Deck, DeckProvider, ShuffledDeck};
use pokerbots_engine::hand::{HandEvaluator, Score};
use pokerbots_engine::player::Decision;
use pokerbots_engine::policy::{Policy, TableView};
use pokerbots_engine::rules::LegalActions;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shared log of (seat, legal actions) for every decision requested.
pub type DecisionLog = Rc<RefCell<Vec<(usize, LegalActions)>>>;

/// Plays the queued decisions in order, then falls back to check/call.
pub struct Scripted {
    queue: VecDeque<Decision>,
    log: DecisionLog,
}

impl Scripted {
    pub fn new(decisions: Vec<Decision>, log: &DecisionLog) -> Box<dyn Policy> {
        Box::new(Self {
            queue: decisions.into(),
            log: Rc::clone(log),
        })
    }
}

impl Policy for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn decide(&mut self, legal: &LegalActions, view: &TableView<'_>) -> Decision {
        self.log.borrow_mut().push((view.seat, legal.clone()));
        self.queue
            .pop_front()
            .unwrap_or_else(|| check_or_call(legal))
    }
}

pub fn check_or_call(legal: &LegalActions) -> Decision {
    match legal.call {
        Some(amount) => Decision::call(amount),
        None => Decision::check(),
    }
}

pub fn new_log() -> DecisionLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn passive(log: &DecisionLog) -> Box<dyn Policy> {
    Scripted::new(vec![], log)
}

/// Uniform choice among offered kinds, uniform raise size.
pub struct Chaotic {
    rng: ChaCha8Rng,
}

impl Chaotic {
    pub fn boxed(seed: u64) -> Box<dyn Policy> {
        Box::new(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl Policy for Chaotic {
    fn name(&self) -> &str {
        "chaotic"
    }

    fn decide(&mut self, legal: &LegalActions, _view: &TableView<'_>) -> Decision {
        let kinds = legal.kinds();
        let pick = kinds[self.rng.random_range(0..kinds.len())];
        match pick {
            pokerbots_engine::player::ActionKind::Raise => {
                let b = legal.raise.expect("raise offered");
                Decision::raise(self.rng.random_range(b.min..=b.max))
            }
            pokerbots_engine::player::ActionKind::Call => Decision::call(legal.call.unwrap()),
            pokerbots_engine::player::ActionKind::Check => Decision::check(),
            pokerbots_engine::player::ActionKind::Fold => Decision::fold(),
        }
    }
}

/// Hands out unshuffled decks: seat 0 always holds 2c 3c and seat 1 holds 4c 5c.
#[derive(Default)]
pub struct OrderedDecks {
    pub provided: Rc<RefCell<usize>>,
}

impl DeckProvider for OrderedDecks {
    fn new_shuffled_deck(&mut self) -> Box<dyn Deck> {
        *self.provided.borrow_mut() += 1;
        Box::new(ShuffledDeck::from_cards(full_deck()))
    }
}

pub const SEAT0_FIRST_CARD: Card = Card::new(Rank::Two, Suit::Clubs);

/// Decides showdowns by seat, recognising seats by the ordered deal.
/// `winner == None` makes every showdown a tie.
pub struct Rigged {
    pub winner: Option<usize>,
}

impl HandEvaluator for Rigged {
    fn evaluate(&self, hole: &[Card; 2], _board: &[Card]) -> Score {
        let seat = if hole[0] == SEAT0_FIRST_CARD { 0 } else { 1 };
        match self.winner {
            Some(w) if w != seat => Score(1),
            _ => Score(0),
        }
    }
}
