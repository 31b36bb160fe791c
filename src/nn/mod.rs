//! Agent integration: observations, encoders and the policy capability.
//!
//! ## Overview
//!
//! - **Observation**: `Observation`, the structured snapshot of a table
//! - **Encoding**: `StateEncoder` with `PerspectiveEncoder` and `FullEncoder`
//! - **Agents**: `Policy` trait, plus `RandomPolicy` and `FirstLegalPolicy`
//!
//! ## Usage
//!
//! ```rust
//! use love_letter::games::LoveLetterBuilder;
//! use love_letter::nn::{PerspectiveEncoder, StateEncoder};
//! use love_letter::rules::RulesEngine;
//!
//! let game = LoveLetterBuilder::new().player_count(3).seed(7).build().unwrap();
//! let snapshot = game.observe(game.current_player());
//! let encoded = PerspectiveEncoder.encode(&snapshot);
//! assert_eq!(encoded.len(), 47);
//! ```

pub mod encoder;
pub mod observation;
pub mod traits;

pub use encoder::{FullEncoder, PerspectiveEncoder, StateEncoder};
pub use observation::{Observation, SeatView};
pub use traits::{EncodedState, FirstLegalPolicy, Policy, RandomPolicy};
