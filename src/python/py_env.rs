//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameError, PlayerId};
use crate::env::PermissiveEnv;
use crate::games::{LoveLetterBuilder, LoveLetterGame};
use crate::rules::{RewardKind, RulesEngine, StepOutcome};

fn to_py_err(err: GameError) -> PyErr {
    if err.is_fatal() {
        PyRuntimeError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

fn parse_reward(name: &str) -> PyResult<RewardKind> {
    match name {
        "simple_turn" => Ok(RewardKind::SimpleTurn),
        "game_completion" => Ok(RewardKind::GameCompletion),
        "fast_elimination" => Ok(RewardKind::FastElimination),
        other => Err(PyValueError::new_err(format!("unknown reward function: {}", other))),
    }
}

/// Python wrapper for a Love Letter table.
///
/// Illegal action ids end the episode with a -10 reward. Use
/// `protected_step` to get an exception instead.
#[pyclass(name = "LoveLetterEnv")]
pub struct PyLoveLetterEnv {
    env: PermissiveEnv<LoveLetterGame>,
}

impl PyLoveLetterEnv {
    fn game(&self) -> &LoveLetterGame {
        self.env.engine()
    }

    fn unpack<'py>(py: Python<'py>, outcome: StepOutcome) -> (Bound<'py, PyArray1<f32>>, f64, bool) {
        (
            PyArray1::from_slice_bound(py, &outcome.observation.tensor),
            outcome.reward,
            outcome.terminated,
        )
    }
}

#[pymethods]
impl PyLoveLetterEnv {
    /// Create a new table and deal the first round.
    ///
    /// # Arguments
    /// - player_count: Number of players (2-4)
    /// - seed: RNG seed for deterministic games
    /// - reward: "simple_turn", "game_completion" or "fast_elimination"
    /// - player_names: Optional display names
    #[new]
    #[pyo3(signature = (player_count = 2, seed = 0, reward = "simple_turn", player_names = None))]
    fn new(player_count: usize, seed: u64, reward: &str, player_names: Option<Vec<String>>) -> PyResult<Self> {
        let game = LoveLetterBuilder::new()
            .player_count(player_count)
            .seed(seed)
            .reward(parse_reward(reward)?)
            .player_names(player_names.unwrap_or_default())
            .build()
            .map_err(to_py_err)?;
        Ok(Self {
            env: PermissiveEnv::new(game),
        })
    }

    /// Re-deal and return the first observation.
    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let observation = self.env.reset().map_err(to_py_err)?;
        Ok(PyArray1::from_slice_bound(py, &observation.tensor))
    }

    /// Play an action id for the current seat.
    ///
    /// Returns (observation, reward, terminated) for the seat that is
    /// current afterwards.
    fn step<'py>(&mut self, py: Python<'py>, action_id: usize) -> PyResult<(Bound<'py, PyArray1<f32>>, f64, bool)> {
        let outcome = self.env.step(action_id).map_err(to_py_err)?;
        Ok(Self::unpack(py, outcome))
    }

    /// Like `step`, but raises ValueError for an illegal action id.
    fn protected_step<'py>(
        &mut self,
        py: Python<'py>,
        action_id: usize,
    ) -> PyResult<(Bound<'py, PyArray1<f32>>, f64, bool)> {
        if !self.env.action_mask().is_legal(action_id) {
            return Err(to_py_err(GameError::IllegalAction { id: action_id }));
        }
        self.step(py, action_id)
    }

    /// Rotate past a seat that is out, or past any seat once the game is over.
    fn advance<'py>(&mut self, py: Python<'py>) -> PyResult<(Bound<'py, PyArray1<f32>>, f64, bool)> {
        let outcome = self.env.advance().map_err(to_py_err)?;
        Ok(Self::unpack(py, outcome))
    }

    /// Boolean legality mask over the whole action space.
    fn action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_slice_bound(py, self.env.action_mask().as_slice())
    }

    fn legal_actions(&self) -> Vec<u8> {
        self.game().legal_actions().into_iter().map(|id| id.0).collect()
    }

    /// Observation for the current seat.
    fn observe<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.game().observe_current().tensor)
    }

    /// Privileged observation with every hand visible.
    fn full_observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.game().encode_full().tensor)
    }

    /// Describe an action id, e.g. "GUARD -> +1 guessing PRIEST".
    fn describe_action(&self, action_id: usize) -> PyResult<String> {
        let action = self.game().catalog().get(action_id).map_err(to_py_err)?;
        Ok(action.to_string())
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.game().current_player().0
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.game().player_count()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.game().is_game_over()
    }

    #[getter]
    fn winners(&self) -> Vec<u8> {
        self.game().winners().iter().map(|p| p.0).collect()
    }

    #[getter]
    fn deck_remaining(&self) -> usize {
        self.game().deck_remaining()
    }

    fn player_name(&self, seat: u8) -> PyResult<String> {
        if seat as usize >= self.game().player_count() {
            return Err(PyValueError::new_err(format!("no seat {}", seat)));
        }
        Ok(self.game().seat(PlayerId::new(seat)).name().to_string())
    }

    fn __repr__(&self) -> String {
        format!(
            "LoveLetterEnv(players={}, current={}, deck={})",
            self.game().player_count(),
            self.game().current_player().0,
            self.game().deck_remaining()
        )
    }
}
