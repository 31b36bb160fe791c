//! Reward functions.
//!
//! A reward is computed for a seat each time it becomes current, after its
//! `safe` flag is cleared and before its per-turn elimination list is reset.

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::games::love_letter::LoveLetterGame;

/// Injectable reward capability.
pub trait RewardFn: Debug + Send + Sync {
    fn reward(&self, game: &LoveLetterGame, seat: PlayerId) -> f64;
}

/// 1 for every turn survived, 0 once out.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleTurnReward;

impl RewardFn for SimpleTurnReward {
    fn reward(&self, game: &LoveLetterGame, seat: PlayerId) -> f64 {
        if game.seat(seat).is_active() {
            1.0
        } else {
            0.0
        }
    }
}

/// Share of the surviving table, plus a bonus once the game is decided.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameCompletionReward;

impl GameCompletionReward {
    pub const GAME_OVER_BONUS: f64 = 5.0;
}

impl RewardFn for GameCompletionReward {
    fn reward(&self, game: &LoveLetterGame, seat: PlayerId) -> f64 {
        if !game.seat(seat).is_active() {
            return 0.0;
        }

        let mut reward = 1.0 / game.active_count().max(1) as f64;
        if game.is_game_over() {
            reward += Self::GAME_OVER_BONUS;
        }
        reward
    }
}

/// Rewards knocking others out quickly.
///
/// 1 for surviving after having played, 1 per seat eliminated during the
/// seat's last move, and the undrawn deck size when it wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastEliminationReward;

impl RewardFn for FastEliminationReward {
    fn reward(&self, game: &LoveLetterGame, seat: PlayerId) -> f64 {
        let player = game.seat(seat);

        let mut reward = if player.is_active() && !player.play_history().is_empty() {
            1.0
        } else {
            0.0
        };

        reward += player.eliminated_this_turn().len() as f64;

        if game.is_game_over() && player.is_active() {
            reward += game.deck_remaining() as f64;
        }

        reward
    }
}

/// Serializable choice among the built-in reward functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    #[default]
    SimpleTurn,
    GameCompletion,
    FastElimination,
}

impl RewardKind {
    #[must_use]
    pub fn build(self) -> Arc<dyn RewardFn> {
        match self {
            RewardKind::SimpleTurn => Arc::new(SimpleTurnReward),
            RewardKind::GameCompletion => Arc::new(GameCompletionReward),
            RewardKind::FastElimination => Arc::new(FastEliminationReward),
        }
    }
}
