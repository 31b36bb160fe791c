//! Rules engine trait and reward functions.
//!
//! `RulesEngine` is what drivers (the permissive environment, the match
//! runner, the Python bindings) program against. Rewards are injectable
//! through `RewardFn`.

pub mod engine;
pub mod reward;

pub use engine::{GameOutcome, RulesEngine, StepDiagnostics, StepOutcome};
pub use reward::{FastEliminationReward, GameCompletionReward, RewardFn, RewardKind, SimpleTurnReward};
