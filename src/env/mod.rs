//! Drivers built on top of the rules engine.
//!
//! - `PermissiveEnv`: folds illegal plays into a penalty for trainers
//! - `Match`: plays a whole table of policies to the end

pub mod permissive;
pub mod runner;

pub use permissive::PermissiveEnv;
pub use runner::{random_policies, Match, MatchSummary, DEFAULT_PLAY_LIMIT};
