//! Two-slot concealed hand.
//!
//! Between turns an active seat holds exactly one card. The acting seat
//! transiently holds two after its draw, until it plays one.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{GameError, GameResult};

pub const HAND_CAPACITY: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: [Card; HAND_CAPACITY],
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from up to two cards.
    pub fn with_cards(cards: &[Card]) -> GameResult<Self> {
        let mut hand = Self::new();
        for &card in cards {
            hand.add(card)?;
        }
        Ok(hand)
    }

    /// Raw slot contents, `Empty` for vacant slots.
    #[must_use]
    pub fn slots(&self) -> [Card; HAND_CAPACITY] {
        self.slots
    }

    /// The single held card, or `None` for an empty hand.
    ///
    /// Errors while two cards are held.
    pub fn card(&self) -> GameResult<Option<Card>> {
        if self.is_full() {
            return Err(GameError::TooManyCards);
        }
        Ok(self.slots.iter().copied().find(|c| !c.is_empty()))
    }

    /// Held cards without the empty slots.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().copied().filter(|c| !c.is_empty())
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        !card.is_empty() && self.slots.contains(&card)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.slots.contains(&Card::Empty)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|c| c.is_empty())
    }

    pub fn add(&mut self, card: Card) -> GameResult<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|c| c.is_empty())
            .ok_or(GameError::HandFull)?;
        *slot = card;
        Ok(())
    }

    /// Remove one copy of `card`.
    pub fn remove(&mut self, card: Card) -> GameResult<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|c| **c == card && !c.is_empty())
            .ok_or(GameError::CardNotInHand { card })?;
        *slot = Card::Empty;
        Ok(())
    }
}
