//! Core engine types: seats, RNG, configuration, actions, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{
    GameConfig, ILLEGAL_ACTION_PENALTY, KNOWLEDGE_CAPACITY, LEDGER_CAPACITY, MAX_PLAYERS, MIN_PLAYERS,
};
pub use action::{Action, ActionId, ActionRecord};
pub use error::{GameError, GameResult};
