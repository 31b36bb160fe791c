//! Python bindings.
//!
//! # Quick Start
//!
//! ```python
//! import love_letter
//!
//! env = love_letter.LoveLetterEnv(player_count=3, seed=42)
//! obs = env.reset()
//! mask = env.action_mask()
//! obs, reward, terminated = env.step(int(mask.nonzero()[0][0]))
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// love_letter: a Love Letter table for reinforcement learning.
#[pymodule]
fn love_letter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLoveLetterEnv>()?;
    m.add("ACTION_SPACE_SIZE", crate::actions::ActionCatalog::standard().len())?;
    m.add("OBSERVATION_SIZE", crate::nn::PerspectiveEncoder::LEN)?;
    Ok(())
}
