//! Deterministic policy that never folds and never raises.

use pokerbots_engine::player::Decision;
use pokerbots_engine::policy::{Policy, TableView};
use pokerbots_engine::rules::LegalActions;

/// Calls every bet it faces and checks when nothing is owed.
#[derive(Debug, Clone, Default)]
pub struct CallingPolicy;

impl CallingPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for CallingPolicy {
    fn name(&self) -> &str {
        "call"
    }

    fn decide(&mut self, legal: &LegalActions, _view: &TableView<'_>) -> Decision {
        match legal.call {
            Some(amount) => Decision::call(amount),
            None if legal.check => Decision::check(),
            None => Decision::fold(),
        }
    }
}
