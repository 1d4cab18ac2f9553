//! Policy choosing uniformly among whatever the engine offers.

use pokerbots_engine::player::{ActionKind, Decision};
use pokerbots_engine::policy::{Policy, TableView};
use pokerbots_engine::rules::LegalActions;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Picks an offered action kind uniformly; a raise commits a uniform amount
/// in the inclusive `[min, max]` range.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, legal: &LegalActions, _view: &TableView<'_>) -> Decision {
        let kinds = legal.kinds();
        let Some(&kind) = kinds.choose(&mut self.rng) else {
            // the engine never asks with an empty offer
            return Decision::fold();
        };
        match (kind, legal.call, legal.raise) {
            (ActionKind::Raise, _, Some(b)) => Decision::raise(self.rng.random_range(b.min..=b.max)),
            (ActionKind::Call, Some(amount), _) => Decision::call(amount),
            (ActionKind::Check, ..) => Decision::check(),
            _ => Decision::fold(),
        }
    }
}
