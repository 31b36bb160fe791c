//! Structured table snapshot.
//!
//! An `Observation` holds the full truth of the table at one instant plus
//! the seat it was taken for. Encoders decide how much of it a consumer may
//! see: the perspective encoder hides other hands, the full encoder does not.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, HAND_CAPACITY};
use crate::core::{ActionId, ActionRecord, PlayerId};
use crate::seats::SeatStatus;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub name: String,
    pub status: SeatStatus,
    pub hand: [Card; HAND_CAPACITY],
    /// Remembered `(seat, card)` pairs in insertion order.
    pub knowledge: Vec<(PlayerId, Card)>,
    pub last_played: Card,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Observation {
    pub viewer: PlayerId,
    pub player_count: usize,
    /// One view per seat, in absolute seat order.
    pub seats: Vec<SeatView>,
    pub deck_remaining: usize,
    pub discard: Vector<Card>,
    pub history: Vector<ActionRecord>,
    pub game_over: bool,
    pub winners: Vec<PlayerId>,
}

impl Observation {
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &SeatView {
        &self.seats[player.index()]
    }

    #[must_use]
    pub fn viewer_seat(&self) -> &SeatView {
        self.seat(self.viewer)
    }

    /// Seats starting from the viewer and proceeding clockwise.
    pub fn seats_from_viewer(&self) -> impl Iterator<Item = &SeatView> {
        let n = self.player_count;
        (0..n).map(move |offset| self.seat(PlayerId::from_offset(self.viewer, offset as u8, n)))
    }

    /// Action ids of every resolved play, oldest first.
    pub fn action_ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.history.iter().map(|record| record.id)
    }
}
