//! The fixed action table.
//!
//! Generated once for `MAX_PLAYERS` seats regardless of the actual table
//! size, so every game shares the same 51 ids. An id is the entry's position
//! in the table and stays valid across runs.
//!
//! | ids   | entries |
//! | ----- | ------- |
//! | 0     | padding (never legal) |
//! | 1-28  | Guard, 4 targets x 7 guesses |
//! | 29    | Guard, no target |
//! | 30-34 | Priest, 4 targets + no target |
//! | 35-39 | Baron, 4 targets + no target |
//! | 40    | Handmaid |
//! | 41-44 | Prince, 4 targets (no fallback) |
//! | 45-49 | King, 4 targets + no target |
//! | 50    | Countess |

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::{Action, ActionId, GameError, GameResult, MAX_PLAYERS};

static STANDARD: Lazy<ActionCatalog> = Lazy::new(|| ActionCatalog::generate(MAX_PLAYERS));

#[derive(Clone, Debug)]
pub struct ActionCatalog {
    actions: Vec<Action>,
    ids: FxHashMap<Action, ActionId>,
}

impl ActionCatalog {
    /// The shared catalog for `MAX_PLAYERS` seats.
    #[must_use]
    pub fn standard() -> &'static ActionCatalog {
        &STANDARD
    }

    /// Build the table for `max_players` relative targets.
    #[must_use]
    pub fn generate(max_players: usize) -> Self {
        let offsets = || 0..max_players as u8;
        let mut actions = vec![Action::new(Card::Empty)];

        for offset in offsets() {
            for guess in Card::guesses() {
                actions.push(Action::guard(offset, guess));
            }
        }
        actions.push(Action::new(Card::Guard));

        for card in [Card::Priest, Card::Baron] {
            actions.extend(offsets().map(|o| Action::targeting(card, o)));
            actions.push(Action::new(card));
        }

        actions.push(Action::new(Card::Handmaid));

        // Prince can always fall back to its own player, so no untargeted entry.
        actions.extend(offsets().map(|o| Action::targeting(Card::Prince, o)));

        actions.extend(offsets().map(|o| Action::targeting(Card::King, o)));
        actions.push(Action::new(Card::King));

        actions.push(Action::new(Card::Countess));

        let ids = actions
            .iter()
            .enumerate()
            .map(|(i, &action)| (action, ActionId(i as u8)))
            .collect();

        Self { actions, ids }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Look up an entry, rejecting ids outside the table.
    pub fn get(&self, id: usize) -> GameResult<&Action> {
        self.actions.get(id).ok_or(GameError::ActionOutOfRange {
            id,
            len: self.actions.len(),
        })
    }

    #[must_use]
    pub fn id_of(&self, action: &Action) -> Option<ActionId> {
        self.ids.get(action).copied()
    }

    /// Whether `card` has an untargeted entry to use when no target is valid.
    #[must_use]
    pub fn has_fallback(&self, card: Card) -> bool {
        card.takes_target() && self.ids.contains_key(&Action::new(card))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, action)| (ActionId(i as u8), action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_size() {
        let catalog = ActionCatalog::standard();
        assert_eq!(catalog.len(), 51);
        assert_eq!(catalog.get(ActionId::EMPTY.index()).unwrap().card, Card::Empty);
        assert_eq!(catalog.id_of(&Action::new(Card::Empty)), Some(ActionId::EMPTY));
    }

    #[test]
    fn test_per_card_counts() {
        let catalog = ActionCatalog::standard();
        let count = |card: Card| catalog.iter().filter(|(_, a)| a.card == card).count();

        assert_eq!(count(Card::Guard), 29);
        assert_eq!(count(Card::Priest), 5);
        assert_eq!(count(Card::Baron), 5);
        assert_eq!(count(Card::Handmaid), 1);
        assert_eq!(count(Card::Prince), 4);
        assert_eq!(count(Card::King), 5);
        assert_eq!(count(Card::Countess), 1);
        assert_eq!(count(Card::Princess), 0);
    }

    #[test]
    fn test_fixed_ids() {
        let catalog = ActionCatalog::standard();
        assert_eq!(catalog.id_of(&Action::guard(0, Card::Priest)), Some(ActionId(1)));
        assert_eq!(catalog.id_of(&Action::guard(1, Card::Priest)), Some(ActionId(8)));
        assert_eq!(catalog.id_of(&Action::guard(3, Card::Princess)), Some(ActionId(28)));
        assert_eq!(catalog.id_of(&Action::new(Card::Guard)), Some(ActionId(29)));
        assert_eq!(catalog.id_of(&Action::targeting(Card::Priest, 0)), Some(ActionId(30)));
        assert_eq!(catalog.id_of(&Action::new(Card::Baron)), Some(ActionId(39)));
        assert_eq!(catalog.id_of(&Action::new(Card::Handmaid)), Some(ActionId(40)));
        assert_eq!(catalog.id_of(&Action::targeting(Card::Prince, 0)), Some(ActionId(41)));
        assert_eq!(catalog.id_of(&Action::targeting(Card::King, 1)), Some(ActionId(46)));
        assert_eq!(catalog.id_of(&Action::new(Card::Countess)), Some(ActionId(50)));
    }

    #[test]
    fn test_regeneration_is_stable() {
        let a = ActionCatalog::generate(MAX_PLAYERS);
        let b = ActionCatalog::generate(MAX_PLAYERS);
        let left: Vec<_> = a.iter().map(|(id, action)| (id, *action)).collect();
        let right: Vec<_> = b.iter().map(|(id, action)| (id, *action)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_guesses_never_guard() {
        let catalog = ActionCatalog::standard();
        assert!(catalog
            .iter()
            .all(|(_, a)| a.guess != Some(Card::Guard) && (a.guess.is_none() || a.card == Card::Guard)));
    }

    #[test]
    fn test_fallbacks() {
        let catalog = ActionCatalog::standard();
        assert!(catalog.has_fallback(Card::Guard));
        assert!(catalog.has_fallback(Card::King));
        assert!(!catalog.has_fallback(Card::Prince));
        assert!(!catalog.has_fallback(Card::Handmaid));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            ActionCatalog::standard().get(51),
            Err(GameError::ActionOutOfRange { id: 51, len: 51 })
        );
    }
}
