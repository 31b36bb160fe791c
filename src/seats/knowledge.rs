//! Bounded memory of other seats' concealed cards.
//!
//! Entries come from Priest looks and King swaps and are keyed by seat
//! handle. The cache is a passive store: the turn engine decides when an
//! entry stops being true and removes or relabels it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{PlayerId, KNOWLEDGE_CAPACITY};

/// Error returned when a fourth distinct subject is inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheFull;

/// Insertion-ordered `(seat, card)` pairs, at most one per seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCache {
    entries: SmallVec<[(PlayerId, Card); KNOWLEDGE_CAPACITY]>,
}

impl KnowledgeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, subject: PlayerId) -> Option<Card> {
        self.entries
            .iter()
            .find(|(seat, _)| *seat == subject)
            .map(|&(_, card)| card)
    }

    #[must_use]
    pub fn contains(&self, subject: PlayerId) -> bool {
        self.get(subject).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Card)> + '_ {
        self.entries.iter().copied()
    }

    /// Remember `card` for `subject`, overwriting an older entry in place.
    pub fn insert(&mut self, subject: PlayerId, card: Card) -> Result<(), CacheFull> {
        if let Some(entry) = self.entries.iter_mut().find(|(seat, _)| *seat == subject) {
            entry.1 = card;
            return Ok(());
        }
        if self.entries.len() == KNOWLEDGE_CAPACITY {
            return Err(CacheFull);
        }
        self.entries.push((subject, card));
        Ok(())
    }

    /// Drop the entry about `subject`, returning what was remembered.
    pub fn remove(&mut self, subject: PlayerId) -> Option<Card> {
        let pos = self.entries.iter().position(|(seat, _)| *seat == subject)?;
        Some(self.entries.remove(pos).1)
    }

    /// Drop the entry about `subject` only if it remembered `card`.
    pub fn forget_if(&mut self, subject: PlayerId, card: Card) -> bool {
        if self.get(subject) == Some(card) {
            self.remove(subject);
            true
        } else {
            false
        }
    }

    /// Exchange the subjects `a` and `b` after their hands were swapped.
    ///
    /// Whatever was known about `a`'s card is now known about `b`'s and
    /// vice versa. Entries keep their slot position; nothing is added
    /// beyond what was already known.
    pub fn relabel(&mut self, a: PlayerId, b: PlayerId) {
        for entry in self.entries.iter_mut() {
            if entry.0 == a {
                entry.0 = b;
            } else if entry.0 == b {
                entry.0 = a;
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
