//! Agent-facing types: encoded observations and the policy capability.
//!
//! A policy only ever sees an encoded observation and the legality mask;
//! it returns a catalog id. Learning policies live outside this crate.

use serde::{Deserialize, Serialize};

use crate::actions::ActionMask;
use crate::core::{ActionId, GameRng};

/// Encoded observation as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Values as integers. Every encoded field is a small whole number.
    #[must_use]
    pub fn to_i64(&self) -> Vec<i64> {
        self.tensor.iter().map(|&v| v as i64).collect()
    }
}

/// Chooses an action for the current seat.
///
/// Must return an id the mask marks legal, or `None` if there is none.
pub trait Policy: Send {
    fn choose(&mut self, observation: &EncodedState, mask: &ActionMask) -> Option<ActionId>;
}

/// Uniformly random legal play.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed from a parent stream, e.g. a fork of the table RNG.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _observation: &EncodedState, mask: &ActionMask) -> Option<ActionId> {
        let legal: Vec<ActionId> = mask.legal_ids().collect();
        self.rng.choose(&legal).copied()
    }
}

/// Always plays the lowest legal id. Deterministic baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalPolicy;

impl Policy for FirstLegalPolicy {
    fn choose(&mut self, _observation: &EncodedState, mask: &ActionMask) -> Option<ActionId> {
        mask.legal_ids().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with(ids: &[u8]) -> ActionMask {
        let mut mask = ActionMask::none(51);
        for &id in ids {
            mask.allow(ActionId(id));
        }
        mask
    }

    #[test]
    fn test_zeros() {
        let state = EncodedState::zeros(vec![47]);
        assert_eq!(state.len(), 47);
        assert!(state.tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_to_i64() {
        let state = EncodedState::new(vec![1.0, 8.0, 0.0], vec![3]);
        assert_eq!(state.to_i64(), vec![1, 8, 0]);
    }

    #[test]
    fn test_random_policy_picks_legal() {
        let obs = EncodedState::zeros(vec![47]);
        let mask = mask_with(&[3, 40, 50]);
        let mut policy = RandomPolicy::new(5);

        for _ in 0..50 {
            let id = policy.choose(&obs, &mask).unwrap();
            assert!(mask.is_legal(id.index()));
        }
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let obs = EncodedState::zeros(vec![47]);
        let mask = mask_with(&[1, 2, 3, 4, 5, 6, 7]);
        let mut a = RandomPolicy::new(9);
        let mut b = RandomPolicy::new(9);

        let left: Vec<_> = (0..20).map(|_| a.choose(&obs, &mask)).collect();
        let right: Vec<_> = (0..20).map(|_| b.choose(&obs, &mask)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_empty_mask_gives_none() {
        let obs = EncodedState::zeros(vec![47]);
        let mask = ActionMask::none(51);
        assert_eq!(RandomPolicy::new(1).choose(&obs, &mask), None);
        assert_eq!(FirstLegalPolicy.choose(&obs, &mask), None);
    }

    #[test]
    fn test_first_legal() {
        let obs = EncodedState::zeros(vec![47]);
        assert_eq!(FirstLegalPolicy.choose(&obs, &mask_with(&[45, 41])), Some(ActionId(41)));
    }

    #[test]
    fn test_encoded_state_serde() {
        let state = EncodedState::new(vec![1.0, 2.0], vec![2]);
        let json = serde_json::to_string(&state).unwrap();
        let back: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
