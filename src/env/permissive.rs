//! Environment wrapper for callers that cannot handle illegal-action errors.
//!
//! An illegal id is folded into `ILLEGAL_ACTION_PENALTY` and an immediate
//! termination instead of an `Err`. The table is left as it was; the
//! episode is over until `reset`.

use tracing::warn;

use crate::actions::ActionMask;
use crate::core::{GameError, GameResult, PlayerId, ILLEGAL_ACTION_PENALTY};
use crate::nn::EncodedState;
use crate::rules::{RulesEngine, StepDiagnostics, StepOutcome};

#[derive(Clone, Debug)]
pub struct PermissiveEnv<E: RulesEngine> {
    engine: E,
    /// Seat that ended the episode with an illegal play.
    forfeited_by: Option<PlayerId>,
}

impl<E: RulesEngine> PermissiveEnv<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            forfeited_by: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_inner(self) -> E {
        self.engine
    }

    #[must_use]
    pub fn forfeited_by(&self) -> Option<PlayerId> {
        self.forfeited_by
    }

    pub fn action_mask(&self) -> ActionMask {
        self.engine.legal_mask()
    }

    /// Like `RulesEngine::step`, but an illegal id ends the episode with a
    /// penalty. Engine invariant violations are still returned as errors.
    pub fn step(&mut self, action_id: usize) -> GameResult<StepOutcome> {
        if self.forfeited_by.is_some() {
            return Err(GameError::GameOver);
        }

        match self.engine.step(action_id) {
            Err(err) if err.is_illegal_action() => {
                let seat = self.engine.current_player();
                warn!(seat = %seat, action_id, %err, "illegal play, ending episode with penalty");
                self.forfeited_by = Some(seat);

                Ok(StepOutcome {
                    observation: self.engine.observe_current(),
                    reward: ILLEGAL_ACTION_PENALTY,
                    terminated: true,
                    diagnostics: StepDiagnostics {
                        observation: self.engine.snapshot(),
                        record: None,
                    },
                })
            }
            result => result,
        }
    }

    /// Rotate past a seat that cannot act.
    pub fn advance(&mut self) -> GameResult<StepOutcome> {
        if self.forfeited_by.is_some() {
            return Err(GameError::GameOver);
        }
        self.engine.advance()
    }

    pub fn reset(&mut self) -> GameResult<EncodedState> {
        self.forfeited_by = None;
        self.engine.reset()
    }
}
