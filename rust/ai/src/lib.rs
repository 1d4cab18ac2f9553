//! # pokerbots-ai: Player policies
//!
//! Concrete [`Policy`] implementations for the heads-up engine and a factory
//! that builds one from its name.
//!
//! - [`calling::CallingPolicy`] - calls whenever it can, otherwise checks
//! - [`random::RandomPolicy`] - uniform over the offered actions
//!
//! ```rust
//! use pokerbots_ai::create_policy;
//!
//! let policy = create_policy("random", Some(7)).expect("known policy");
//! assert_eq!(policy.name(), "random");
//! assert!(create_policy("gto", None).is_err());
//! ```

use pokerbots_engine::policy::Policy;

pub mod calling;
pub mod random;

pub use calling::CallingPolicy;
pub use random::RandomPolicy;

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: &[&str] = &["call", "random"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl std::fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown policy: {}. Available: {}",
            self.0,
            POLICY_NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownPolicy {}

/// Builds a policy by name. `seed` makes random policies reproducible and
/// is ignored by deterministic ones.
pub fn create_policy(kind: &str, seed: Option<u64>) -> Result<Box<dyn Policy>, UnknownPolicy> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "call" | "calling" => Ok(Box::new(CallingPolicy::new())),
        "random" => Ok(Box::new(match seed {
            Some(s) => RandomPolicy::with_seed(s),
            None => RandomPolicy::new(),
        })),
        _ => Err(UnknownPolicy(kind.to_string())),
    }
}

pub fn is_known_policy(kind: &str) -> bool {
    let k = kind.trim().to_ascii_lowercase();
    k == "calling" || POLICY_NAMES.contains(&k.as_str())
}
