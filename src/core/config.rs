//! Table configuration.
//!
//! `GameConfig` fixes everything that shapes one game: seat count, seed,
//! seat names, and optional scripted setup (starting seat and stacked deck)
//! for replays and tests. The action catalog and observation sizes never
//! depend on it; they are always built for `MAX_PLAYERS`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::PlayerId;
use crate::cards::{Card, Deck};
use crate::rules::RewardKind;

/// Largest supported table. The action catalog is generated for this size.
pub const MAX_PLAYERS: usize = 4;

/// Smallest playable table.
pub const MIN_PLAYERS: usize = 2;

/// Distinct opponents a seat can remember at once.
pub const KNOWLEDGE_CAPACITY: usize = 3;

/// Cards that can ever become visible: the deck minus the burn card.
pub const LEDGER_CAPACITY: usize = Deck::SIZE - 1;

/// Reward given by the permissive environment for an illegal play.
pub const ILLEGAL_ACTION_PENALTY: f64 = -10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_count: usize,
    pub seed: u64,
    /// Display names; missing entries default to "Player {i}".
    pub player_names: Vec<String>,
    /// Fixed first seat. `None` picks one with the table RNG.
    pub starting_seat: Option<PlayerId>,
    /// Scripted deal order. The first card is burned.
    pub stacked_deck: Option<Vec<Card>>,
    pub reward: RewardKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: 0,
            player_names: Vec::new(),
            starting_seat: None,
            stacked_deck: None,
            reward: RewardKind::default(),
        }
    }
}

impl GameConfig {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_player_names(mut self, names: Vec<String>) -> Self {
        self.player_names = names;
        self
    }

    #[must_use]
    pub fn with_starting_seat(mut self, seat: PlayerId) -> Self {
        self.starting_seat = Some(seat);
        self
    }

    #[must_use]
    pub fn with_stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.stacked_deck = Some(cards);
        self
    }

    #[must_use]
    pub fn with_reward(mut self, reward: RewardKind) -> Self {
        self.reward = reward;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> String {
        self.player_names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| format!("Player {}", player.index()))
    }

    pub fn validate(&self) -> GameResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "player count must be {}-{}, got {}",
                    MIN_PLAYERS, MAX_PLAYERS, self.player_count
                ),
            });
        }
        if self.player_names.len() > self.player_count {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "{} names given for {} seats",
                    self.player_names.len(),
                    self.player_count
                ),
            });
        }
        if let Some(seat) = self.starting_seat {
            if seat.index() >= self.player_count {
                return Err(GameError::InvalidConfig {
                    reason: format!("starting seat {} does not exist", seat),
                });
            }
        }
        if let Some(cards) = &self.stacked_deck {
            // Burn card, one per seat, one extra for the starting seat.
            let needed = self.player_count + 2;
            if cards.len() < needed {
                return Err(GameError::InvalidDeck {
                    reason: format!("{} cards cannot deal {} seats", cards.len(), self.player_count),
                });
            }
            Deck::stacked(cards.clone())?;
        }
        Ok(())
    }
}
