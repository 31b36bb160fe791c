//! Action representation: card + relative target + guess.
//!
//! Targets are clockwise offsets from the acting seat (0 = self), never
//! absolute seat indices, so the same catalog entry means "the seat to my
//! left" no matter who plays it. That keeps the action space one fixed size
//! for every seat and every table size.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// Stable index into the action catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u8);

impl ActionId {
    /// The padding action, never legal to play.
    pub const EMPTY: ActionId = ActionId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playable card with its choices.
///
/// `guess` is only ever populated for Guard and never holds Guard itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub card: Card,
    /// Clockwise offset from the acting seat.
    pub target: Option<u8>,
    pub guess: Option<Card>,
}

impl Action {
    /// An untargeted play.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self {
            card,
            target: None,
            guess: None,
        }
    }

    #[must_use]
    pub const fn targeting(card: Card, offset: u8) -> Self {
        Self {
            card,
            target: Some(offset),
            guess: None,
        }
    }

    #[must_use]
    pub const fn guard(offset: u8, guess: Card) -> Self {
        Self {
            card: Card::Guard,
            target: Some(offset),
            guess: Some(guess),
        }
    }

    /// Resolve the relative target against the acting seat.
    #[must_use]
    pub fn absolute_target(&self, actor: PlayerId, player_count: usize) -> Option<PlayerId> {
        self.target
            .map(|offset| PlayerId::from_offset(actor, offset, player_count))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card)?;
        if let Some(offset) = self.target {
            write!(f, " -> +{}", offset)?;
        }
        if let Some(guess) = self.guess {
            write!(f, " guessing {}", guess)?;
        }
        Ok(())
    }
}

/// Ledger entry for a resolved play.
///
/// `discarding_player`/`discard` are set when the play knocked a card out
/// of some seat's hand (Guard hit, Baron loser, Prince target).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: ActionId,
    pub action: Action,
    pub player: PlayerId,
    /// The target resolved to an absolute seat.
    pub target: Option<PlayerId>,
    pub discarding_player: Option<PlayerId>,
    pub discard: Option<Card>,
}

impl ActionRecord {
    #[must_use]
    pub fn new(id: ActionId, action: Action, player: PlayerId, target: Option<PlayerId>) -> Self {
        Self {
            id,
            action,
            player,
            target,
            discarding_player: None,
            discard: None,
        }
    }
}
