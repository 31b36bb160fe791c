//! Engine error kinds.
//!
//! `IllegalAction` and `ActionOutOfRange` are caller errors and leave the
//! table untouched. `DeckExhausted` is recovered locally by the Prince draw
//! path. Everything else means an engine invariant broke; the game should be
//! abandoned rather than continued.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Action {id} is not legal for the current seat")]
    IllegalAction { id: usize },
    #[error("Action id {id} is outside the catalog (size {len})")]
    ActionOutOfRange { id: usize, len: usize },
    #[error("Hand is full and cannot accept more cards")]
    HandFull,
    #[error("Hand does not contain {card}")]
    CardNotInHand { card: Card },
    #[error("Expected a single card in hand, but found two")]
    TooManyCards,
    #[error("Deck has no more cards")]
    DeckExhausted,
    #[error("{seat} already remembers three other seats, cannot add {target}")]
    KnowledgeCacheOverflow { seat: PlayerId, target: PlayerId },
    #[error("No active seats remaining")]
    NoActiveSeatsRemaining,
    #[error("The game is over")]
    GameOver,
    #[error("No result after {limit} plays")]
    TurnLimitExceeded { limit: usize },
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("Invalid deck: {reason}")]
    InvalidDeck { reason: String },
    #[error("Engine invariant violated: {reason}")]
    InvariantViolation { reason: String },
}

impl GameError {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        GameError::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller choosing an action outside the mask.
    #[must_use]
    pub fn is_illegal_action(&self) -> bool {
        matches!(
            self,
            GameError::IllegalAction { .. } | GameError::ActionOutOfRange { .. }
        )
    }

    /// True for errors that leave the table in an unusable state.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::HandFull
                | GameError::CardNotInHand { .. }
                | GameError::TooManyCards
                | GameError::DeckExhausted
                | GameError::KnowledgeCacheOverflow { .. }
                | GameError::NoActiveSeatsRemaining
                | GameError::InvariantViolation { .. }
        )
    }
}
