//! The shared draw pile.
//!
//! Every deal burns the top card: the pointer starts past it, and the burned
//! card is never drawn, observed or recorded in any ledger.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{GameError, GameResult, GameRng};

/// An ordering of cards plus a draw pointer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    pointer: usize,
}

impl Deck {
    /// Total physical cards in a full deck.
    pub const SIZE: usize = 16;

    /// A full deck in catalog order, nothing burned yet.
    #[must_use]
    pub fn new() -> Self {
        let cards = Card::ORDERED
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(card.frequency()))
            .collect();
        Self { cards, pointer: 0 }
    }

    /// A deck dealt in exactly the given order. The first card is burned.
    ///
    /// Any subset of the official deck is accepted; no card may appear more
    /// often than its official frequency.
    pub fn stacked(cards: Vec<Card>) -> GameResult<Self> {
        if cards.is_empty() {
            return Err(GameError::InvalidDeck {
                reason: "a stacked deck needs at least the burn card".to_string(),
            });
        }
        if cards.contains(&Card::Empty) {
            return Err(GameError::InvalidDeck {
                reason: "EMPTY is not a real card".to_string(),
            });
        }
        for card in Card::ORDERED {
            let count = cards.iter().filter(|&&c| c == card).count();
            if count > card.frequency() {
                return Err(GameError::InvalidDeck {
                    reason: format!("{} appears {} times, at most {} allowed", card, count, card.frequency()),
                });
            }
        }

        Ok(Self { cards, pointer: 1 })
    }

    /// Shuffle all cards and burn the top one.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.pointer = 1;
    }

    pub fn draw(&mut self) -> GameResult<Card> {
        let card = *self.cards.get(self.pointer).ok_or(GameError::DeckExhausted)?;
        self.pointer += 1;
        Ok(card)
    }

    /// Count of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.pointer)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
