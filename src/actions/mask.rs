//! Legality vector over the action catalog.

use serde::{Deserialize, Serialize};

use crate::core::ActionId;

/// One flag per catalog id, computed fresh for the current seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMask {
    bits: Vec<bool>,
}

impl ActionMask {
    /// All-false mask of the given length.
    #[must_use]
    pub fn none(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn allow(&mut self, id: ActionId) {
        if let Some(bit) = self.bits.get_mut(id.index()) {
            *bit = true;
        }
    }

    #[must_use]
    pub fn is_legal(&self, id: usize) -> bool {
        self.bits.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[must_use]
    pub fn count_legal(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn legal_ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &legal)| legal)
            .map(|(i, _)| ActionId(i as u8))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}
