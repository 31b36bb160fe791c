//! Rules engine trait for driving a table.
//!
//! The engine exposes only pure state transitions:
//! - a legality mask for the current seat
//! - `step`, consuming an action id
//! - `advance`, rotating past a seat that has nothing left to do
//! - observation snapshots
//!
//! Anything that waits on an agent lives outside, in the caller.

use serde::{Deserialize, Serialize};

use crate::actions::ActionMask;
use crate::core::{ActionId, ActionRecord, GameConfig, GameResult, PlayerId};
use crate::nn::{EncodedState, Observation};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seats still active at the end. More than one on a final tie.
    pub winners: Vec<PlayerId>,
}

impl GameOutcome {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Side information returned with every transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepDiagnostics {
    /// Structured snapshot taken after resolution, before rotating seats.
    pub observation: Observation,
    /// The ledger entry for the resolved play, `None` for a pure rotation.
    pub record: Option<ActionRecord>,
}

/// What the caller sees after `step` or `advance`.
///
/// `reward` and `terminated` belong to the seat that just became current:
/// `terminated` is true when that seat is out or the game is over.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub observation: EncodedState,
    pub reward: f64,
    pub terminated: bool,
    pub diagnostics: StepDiagnostics,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_mask`: all false when the current seat cannot act
/// - `step`: rejects ids outside the mask with an illegal-action error and
///   leaves the table untouched
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    /// Seat whose decision is pending.
    fn current_player(&self) -> PlayerId;

    /// Whether the current seat is still in the round.
    fn current_is_active(&self) -> bool;

    fn legal_mask(&self) -> ActionMask;

    /// Play the given catalog id for the current seat.
    fn step(&mut self, action_id: usize) -> GameResult<StepOutcome>;

    /// Rotate to the next seat without playing.
    ///
    /// Only allowed when the current seat cannot act: it is out of the
    /// round, or the game is over.
    fn advance(&mut self) -> GameResult<StepOutcome>;

    /// Re-deal and return the first observation.
    fn reset(&mut self) -> GameResult<EncodedState>;

    /// Observation vector for the current seat.
    fn observe_current(&self) -> EncodedState;

    /// Structured snapshot from the current seat's point of view.
    fn snapshot(&self) -> Observation;

    fn is_terminal(&self) -> Option<GameOutcome>;

    // === Convenience Methods ===

    /// Legal ids for the current seat.
    fn legal_actions(&self) -> Vec<ActionId> {
        self.legal_mask().legal_ids().collect()
    }
}
