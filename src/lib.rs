//! # love-letter
//!
//! A Love Letter rules engine for driving automated agents.
//!
//! ## Design Principles
//!
//! 1. **Fixed action space**: 51 action ids generated once for four seats.
//!    Targets are clockwise offsets from the acting seat, so an id means the
//!    same thing for every seat and every table size.
//!
//! 2. **Truthful hidden information**: each seat remembers at most three
//!    other seats' cards. The engine drops or relabels those memories the
//!    moment a discard, elimination or King swap makes them stale.
//!
//! 3. **Deterministic**: all randomness flows from the configured seed, so a
//!    game replays exactly from its seed and the chosen action ids.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, actions, errors
//! - `cards`: card kinds, deck, hand
//! - `seats`: per-seat state and knowledge cache
//! - `actions`: the action catalog and legality masks
//! - `rules`: `RulesEngine` trait and reward functions
//! - `games`: the Love Letter table
//! - `nn`: observations, encoders and the policy capability
//! - `env`: permissive wrapper and whole-table match runner
//!
//! ## Usage
//!
//! ```rust
//! use love_letter::{LoveLetterBuilder, RulesEngine};
//!
//! let mut game = LoveLetterBuilder::new().player_count(3).seed(42).build().unwrap();
//! while game.is_terminal().is_none() {
//!     if game.current_is_active() {
//!         let id = game.legal_actions()[0];
//!         game.step(id.index()).unwrap();
//!     } else {
//!         game.advance().unwrap();
//!     }
//! }
//! assert!(!game.winners().is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod seats;
pub mod actions;
pub mod rules;
pub mod games;
pub mod nn;
pub mod env;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionId, ActionRecord, GameConfig, GameError, GameResult, GameRng, GameRngState, PlayerId,
    PlayerMap,
};

pub use crate::cards::{Card, Deck, Hand};

pub use crate::seats::{KnowledgeCache, Seat, SeatStatus};

pub use crate::actions::{ActionCatalog, ActionMask};

pub use crate::rules::{GameOutcome, RewardFn, RewardKind, RulesEngine, StepDiagnostics, StepOutcome};

pub use crate::games::{LoveLetterBuilder, LoveLetterGame};

pub use crate::nn::{
    EncodedState, FirstLegalPolicy, FullEncoder, Observation, PerspectiveEncoder, Policy, RandomPolicy,
    StateEncoder,
};

pub use crate::env::{Match, MatchSummary, PermissiveEnv};
