//! Card catalog: the eight card kinds, their values and official counts.

use serde::{Deserialize, Serialize};

/// A Love Letter card.
///
/// The discriminant is the card's value. `Empty` is a sentinel for vacant
/// hand slots and observation padding, never a real card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    #[default]
    Empty = 0,
    Guard = 1,
    Priest = 2,
    Baron = 3,
    Handmaid = 4,
    Prince = 5,
    King = 6,
    Countess = 7,
    Princess = 8,
}

impl Card {
    /// Every real card kind, in value order.
    pub const ORDERED: [Card; 8] = [
        Card::Guard,
        Card::Priest,
        Card::Baron,
        Card::Handmaid,
        Card::Prince,
        Card::King,
        Card::Countess,
        Card::Princess,
    ];

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_value(value: u8) -> Option<Card> {
        match value {
            0 => Some(Card::Empty),
            1..=8 => Some(Card::ORDERED[value as usize - 1]),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Card::Empty)
    }

    /// Whether playing this card names another seat.
    #[must_use]
    pub const fn takes_target(self) -> bool {
        matches!(
            self,
            Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King
        )
    }

    /// Copies of this card in the 16-card deck.
    #[must_use]
    pub const fn frequency(self) -> usize {
        match self {
            Card::Empty => 0,
            Card::Guard => 5,
            Card::Priest | Card::Baron | Card::Handmaid | Card::Prince => 2,
            Card::King | Card::Countess | Card::Princess => 1,
        }
    }

    /// Cards a Guard may name. Guard itself is never a legal guess.
    pub fn guesses() -> impl Iterator<Item = Card> {
        Card::ORDERED.into_iter().filter(|&c| c != Card::Guard)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Empty => "EMPTY",
            Card::Guard => "GUARD",
            Card::Priest => "PRIEST",
            Card::Baron => "BARON",
            Card::Handmaid => "HANDMAID",
            Card::Prince => "PRINCE",
            Card::King => "KING",
            Card::Countess => "COUNTESS",
            Card::Princess => "PRINCESS",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_sixteen_cards() {
        let total: usize = Card::ORDERED.iter().map(|c| c.frequency()).sum();
        assert_eq!(total, 16);
        assert_eq!(Card::Empty.frequency(), 0);
    }

    #[test]
    fn test_values_round_trip() {
        for card in Card::ORDERED {
            assert_eq!(Card::from_value(card.value()), Some(card));
        }
        assert_eq!(Card::from_value(0), Some(Card::Empty));
        assert_eq!(Card::from_value(9), None);
    }

    #[test]
    fn test_takes_target() {
        let targeted: Vec<_> = Card::ORDERED.into_iter().filter(|c| c.takes_target()).collect();
        assert_eq!(
            targeted,
            vec![Card::Guard, Card::Priest, Card::Baron, Card::Prince, Card::King]
        );
    }

    #[test]
    fn test_guesses_exclude_guard() {
        let guesses: Vec<_> = Card::guesses().collect();
        assert_eq!(guesses.len(), 7);
        assert!(!guesses.contains(&Card::Guard));
        assert!(!guesses.contains(&Card::Empty));
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(Card::Baron < Card::Princess);
        assert!(Card::Empty < Card::Guard);
        assert_eq!(Card::Countess.to_string(), "COUNTESS");
    }
}
