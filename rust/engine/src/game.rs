//! Round orchestration: dealer rotation, blinds, the four streets and
//! settlement, repeated until a player runs out of chips.

use tracing::{info, warn};

use crate::cards::Card;
use crate::deck::{DeckProvider, SeededDeckProvider};
use crate::engine::{play_street, StreetOutcome};
use crate::errors::GameError;
use crate::hand::{HandEvaluator, StandardEvaluator};
use crate::logger::{ActionRecord, Street};
use crate::player::Player;
use crate::policy::Policy;
use crate::pot;
use crate::showdown::{self, Settlement};

/// Default starting stack for each player in chips.
pub const STARTING_STACK: u32 = 10_000;

/// Default small blind; the big blind is always twice the small blind.
pub const SMALL_BLIND: u32 = 10;

/// Everything that happened in one round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundSummary {
    /// 1-based round number within the game.
    pub round: u32,
    pub dealer: usize,
    /// Chips posted as blinds, indexed by seat.
    pub blinds: [u32; 2],
    pub board: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    /// The last street that was dealt and played.
    pub last_street: Street,
    pub settlement: Settlement,
    pub stacks_before: [u32; 2],
    pub stacks_after: [u32; 2],
}

/// A heads-up game between two seats. Owns the players, their policies and
/// the collaborators for the lifetime of the game.
pub struct Game {
    players: [Player; 2],
    policies: [Box<dyn Policy>; 2],
    deck_provider: Box<dyn DeckProvider>,
    evaluator: Box<dyn HandEvaluator>,
    small_blind: u32,
    dealer: usize,
    rounds_played: u32,
}

impl Game {
    /// New game with an entropy-seeded deck and the standard evaluator.
    /// The dealer index starts at 0 and flips before every round, so seat 1
    /// deals the first round.
    pub fn new(players: [Player; 2], policies: [Box<dyn Policy>; 2], small_blind: u32) -> Self {
        Self {
            players,
            policies,
            deck_provider: Box::new(SeededDeckProvider::from_entropy()),
            evaluator: Box::new(StandardEvaluator),
            small_blind,
            dealer: 0,
            rounds_played: 0,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_deck_provider(Box::new(SeededDeckProvider::new(seed)))
    }

    pub fn with_deck_provider(mut self, provider: Box<dyn DeckProvider>) -> Self {
        self.deck_provider = provider;
        self
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn HandEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    /// Twice the small blind, saturating; [`Game::play_round`] rejects a
    /// blind whose double does not fit.
    pub fn big_blind(&self) -> u32 {
        self.small_blind.saturating_mul(2)
    }
    pub fn stacks(&self) -> [u32; 2] {
        [self.players[0].stack(), self.players[1].stack()]
    }

    /// Players that still have chips, in seat order.
    pub fn survivors(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.stack() > 0).collect()
    }

    pub fn is_over(&self) -> bool {
        self.survivors().len() < 2
    }

    /// The last player with chips, once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        match self.survivors().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Plays rounds until `max_rounds` have been played in this call or a
    /// player is out of chips.
    pub fn play(&mut self, max_rounds: u32) -> Result<Vec<RoundSummary>, GameError> {
        let mut summaries = Vec::new();
        for _ in 0..max_rounds {
            if self.is_over() {
                break;
            }
            summaries.push(self.play_round()?);
        }
        if let Some(winner) = self.winner() {
            info!(player = winner.name(), "player won the game");
        }
        Ok(summaries)
    }

    /// Plays one complete round and settles it.
    ///
    /// Refuses to start while a player has an empty stack, or while the
    /// chips in play or the big blind do not fit in a `u32`. If a policy
    /// breaks the action contract the round is abandoned: every pot goes
    /// back to its owner and the error is returned.
    pub fn play_round(&mut self) -> Result<RoundSummary, GameError> {
        if let Some(player) = self.players.iter().position(|p| p.stack() == 0) {
            return Err(GameError::PlayerBusted { player });
        }
        self.check_chip_limits()?;
        let stacks_before = self.stacks();
        self.dealer = pot::opponent(self.dealer);
        self.rounds_played += 1;

        let result = self.run_round(stacks_before);
        if result.is_err() {
            for p in &mut self.players {
                p.refund_pot();
            }
        }
        for p in &mut self.players {
            p.clear_cards();
        }
        let summary = result?;

        info!(
            round = summary.round,
            winners = ?summary.settlement.winners,
            kind = ?summary.settlement.kind,
            stacks = ?summary.stacks_after,
            "round settled"
        );
        for p in self.players.iter().filter(|p| p.stack() == 0) {
            warn!(player = p.name(), "player lost their stack");
        }
        Ok(summary)
    }

    /// Both stacks together bound every pot and payout, since chips are
    /// only moved between the two seats.
    fn check_chip_limits(&self) -> Result<(), GameError> {
        let total = self
            .players
            .iter()
            .try_fold(0u32, |acc, p| acc.checked_add(p.stack()));
        if total.is_none() || self.small_blind.checked_mul(2).is_none() {
            return Err(GameError::ChipOverflow {
                stacks: self.stacks(),
                small_blind: self.small_blind,
                limit: u32::MAX,
            });
        }
        Ok(())
    }

    fn run_round(&mut self, stacks_before: [u32; 2]) -> Result<RoundSummary, GameError> {
        let dealer = self.dealer;
        let mut deck = self.deck_provider.new_shuffled_deck();
        for p in &mut self.players {
            let hole = deck.draw(2)?;
            p.reset_for_round([hole[0], hole[1]]);
        }

        let blinds = self.post_blinds()?;
        let mut board: Vec<Card> = Vec::with_capacity(5);
        let mut actions = Vec::new();
        let mut last_street = Street::Preflop;

        let preflop = self.betting(Street::Preflop, &board, &mut actions)?;
        if !preflop.ended_by_fold() {
            for (street, n) in [(Street::Flop, 3), (Street::Turn, 1), (Street::River, 1)] {
                board.extend(deck.draw(n)?);
                last_street = street;
                // a river fold settles exactly like a settled river
                if self.betting(street, &board, &mut actions)?.ended_by_fold() {
                    break;
                }
            }
        }

        let settlement = showdown::resolve(&mut self.players, &board, self.evaluator.as_ref())?;
        Ok(RoundSummary {
            round: self.rounds_played,
            dealer,
            blinds,
            board,
            actions,
            last_street,
            settlement,
            stacks_before,
            stacks_after: self.stacks(),
        })
    }

    /// Non-dealer posts the small blind, dealer the big blind, each capped
    /// at their stack.
    fn post_blinds(&mut self) -> Result<[u32; 2], GameError> {
        let mut posted = [0; 2];
        let non_dealer = pot::opponent(self.dealer);
        for (seat, blind) in [(non_dealer, self.small_blind), (self.dealer, self.big_blind())] {
            let amount = self.players[seat].stack().min(blind);
            pot::commit(&mut self.players[seat], amount)?;
            posted[seat] = amount;
        }
        Ok(posted)
    }

    fn betting(
        &mut self,
        street: Street,
        board: &[Card],
        actions: &mut Vec<ActionRecord>,
    ) -> Result<StreetOutcome, GameError> {
        play_street(
            &mut self.players,
            &mut self.policies,
            self.dealer,
            street,
            board,
            actions,
        )
    }
}
