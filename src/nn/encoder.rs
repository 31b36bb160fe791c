//! Observation vectors for agents.
//!
//! Both layouts are sized for `MAX_PLAYERS` seats and a full ledger, so the
//! shape never changes between games. Unused positions are zero, which is
//! indistinguishable from a literal `Empty` card.
//!
//! Perspective layout (47 values):
//!
//! | offset | len | field |
//! | ------ | --- | ----- |
//! | 0      | 2   | viewer's hand slots |
//! | 2      | 6   | 3 x (target offset, card) knowledge entries |
//! | 8      | 8   | 4 x (active, safe), clockwise from the viewer |
//! | 16     | 1   | undrawn deck size |
//! | 17     | 15  | discard ledger card values |
//! | 32     | 15  | action id history |
//!
//! Full layout (72 values): seat count, then every seat's hand, every seat's
//! knowledge and every seat's status in absolute seat order, then the same
//! deck, discard and history tail.

use crate::actions::ActionCatalog;
use crate::cards::HAND_CAPACITY;
use crate::core::{KNOWLEDGE_CAPACITY, LEDGER_CAPACITY, MAX_PLAYERS};

use super::observation::{Observation, SeatView};
use super::traits::EncodedState;

const KNOWLEDGE_SLOT: usize = 2;
const STATUS_SLOT: usize = 2;

/// Encodes a table snapshot into a flat vector.
pub trait StateEncoder: Send + Sync {
    fn encode(&self, observation: &Observation) -> EncodedState;

    /// Length of every encoded vector.
    fn output_len(&self) -> usize;

    fn output_shape(&self) -> Vec<usize> {
        vec![self.output_len()]
    }

    /// Size of the policy output this observation pairs with.
    fn action_space_size(&self) -> usize {
        ActionCatalog::standard().len()
    }
}

/// What the viewing seat may legitimately know, in its own relative frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerspectiveEncoder;

impl PerspectiveEncoder {
    pub const LEN: usize = HAND_CAPACITY
        + KNOWLEDGE_CAPACITY * KNOWLEDGE_SLOT
        + MAX_PLAYERS * STATUS_SLOT
        + 1
        + LEDGER_CAPACITY
        + LEDGER_CAPACITY;
}

impl StateEncoder for PerspectiveEncoder {
    fn encode(&self, observation: &Observation) -> EncodedState {
        let mut out = Vec::with_capacity(Self::LEN);
        let viewer = observation.viewer_seat();

        push_hand(&mut out, viewer);
        push_knowledge(&mut out, viewer, observation.player_count);

        let mut statuses = 0;
        for seat in observation.seats_from_viewer() {
            push_status(&mut out, seat);
            statuses += 1;
        }
        pad(&mut out, (MAX_PLAYERS - statuses) * STATUS_SLOT);

        push_public_tail(&mut out, observation);

        debug_assert_eq!(out.len(), Self::LEN);
        EncodedState::new(out, vec![Self::LEN])
    }

    fn output_len(&self) -> usize {
        Self::LEN
    }
}

/// Privileged view of the whole table, in absolute seat order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullEncoder;

impl FullEncoder {
    pub const LEN: usize = 1
        + MAX_PLAYERS * HAND_CAPACITY
        + MAX_PLAYERS * KNOWLEDGE_CAPACITY * KNOWLEDGE_SLOT
        + MAX_PLAYERS * STATUS_SLOT
        + 1
        + LEDGER_CAPACITY
        + LEDGER_CAPACITY;
}

impl StateEncoder for FullEncoder {
    fn encode(&self, observation: &Observation) -> EncodedState {
        let mut out = Vec::with_capacity(Self::LEN);
        let missing = MAX_PLAYERS - observation.player_count;

        out.push(observation.player_count as f32);

        for seat in &observation.seats {
            push_hand(&mut out, seat);
        }
        pad(&mut out, missing * HAND_CAPACITY);

        for seat in &observation.seats {
            push_knowledge(&mut out, seat, observation.player_count);
        }
        pad(&mut out, missing * KNOWLEDGE_CAPACITY * KNOWLEDGE_SLOT);

        for seat in &observation.seats {
            push_status(&mut out, seat);
        }
        pad(&mut out, missing * STATUS_SLOT);

        push_public_tail(&mut out, observation);

        debug_assert_eq!(out.len(), Self::LEN);
        EncodedState::new(out, vec![Self::LEN])
    }

    fn output_len(&self) -> usize {
        Self::LEN
    }
}

fn pad(out: &mut Vec<f32>, count: usize) {
    out.extend(std::iter::repeat(0.0).take(count));
}

fn push_hand(out: &mut Vec<f32>, seat: &SeatView) {
    out.extend(seat.hand.iter().map(|card| card.value() as f32));
}

/// Knowledge entries with the subject as a clockwise offset from `seat`.
fn push_knowledge(out: &mut Vec<f32>, seat: &SeatView, player_count: usize) {
    let mut slots = 0;
    for &(subject, card) in seat.knowledge.iter().take(KNOWLEDGE_CAPACITY) {
        out.push(subject.offset_from(seat.player, player_count) as f32);
        out.push(card.value() as f32);
        slots += 1;
    }
    pad(out, (KNOWLEDGE_CAPACITY - slots) * KNOWLEDGE_SLOT);
}

fn push_status(out: &mut Vec<f32>, seat: &SeatView) {
    out.push(if seat.status.active { 1.0 } else { 0.0 });
    out.push(if seat.status.safe { 1.0 } else { 0.0 });
}

fn push_public_tail(out: &mut Vec<f32>, observation: &Observation) {
    out.push(observation.deck_remaining as f32);

    let discards = observation.discard.len().min(LEDGER_CAPACITY);
    out.extend(
        observation
            .discard
            .iter()
            .take(LEDGER_CAPACITY)
            .map(|card| card.value() as f32),
    );
    pad(out, LEDGER_CAPACITY - discards);

    let plays = observation.history.len().min(LEDGER_CAPACITY);
    out.extend(
        observation
            .action_ids()
            .take(LEDGER_CAPACITY)
            .map(|id| id.index() as f32),
    );
    pad(out, LEDGER_CAPACITY - plays);
}
