//! Legality, turn flow and the end-of-round check.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::game::LoveLetterGame;
use crate::actions::ActionMask;
use crate::cards::Card;
use crate::core::{Action, ActionId, ActionRecord, GameError, GameResult, PlayerId, MAX_PLAYERS};
use crate::nn::Observation;
use crate::rules::{RulesEngine, StepDiagnostics, StepOutcome};

/// Relative offsets a card may currently be aimed at.
pub type TargetOffsets = SmallVec<[u8; MAX_PLAYERS]>;

impl LoveLetterGame {
    /// Offsets, relative to the current seat, that `card` may target.
    ///
    /// Inactive and protected seats are never valid. Only Prince may aim at
    /// the acting seat itself.
    #[must_use]
    pub fn valid_targets(&self, card: Card) -> TargetOffsets {
        if !card.takes_target() {
            return TargetOffsets::new();
        }

        let first = if card == Card::Prince { 0 } else { 1 };
        self.seats
            .iter_from(self.current)
            .enumerate()
            .skip(first)
            .filter(|(_, (_, seat))| seat.is_active() && !seat.is_safe())
            .map(|(offset, _)| offset as u8)
            .collect()
    }

    fn is_legal(&self, action: &Action) -> bool {
        let hand = self.seats[self.current].hand();
        if action.card.is_empty() || !hand.contains(action.card) {
            return false;
        }
        if hand.contains(Card::Countess) && matches!(action.card, Card::Prince | Card::King) {
            return false;
        }
        if !action.card.takes_target() {
            return action.target.is_none();
        }

        let targets = self.valid_targets(action.card);
        match action.target {
            Some(offset) => targets.contains(&offset),
            None => targets.is_empty() && self.catalog.has_fallback(action.card),
        }
    }

    pub(super) fn mask_for_current(&self) -> ActionMask {
        let mut mask = ActionMask::none(self.catalog.len());
        if self.game_over || !self.seats[self.current].is_active() {
            return mask;
        }

        for (id, action) in self.catalog.iter() {
            if self.is_legal(action) {
                mask.allow(id);
            }
        }
        mask
    }

    /// Look up an id for the current seat and resolve its target to a seat.
    pub fn decode_action(&self, action_id: usize) -> GameResult<(ActionId, Action, Option<PlayerId>)> {
        let action = *self.catalog.get(action_id)?;
        if self.game_over || !self.seats[self.current].is_active() || !self.is_legal(&action) {
            return Err(GameError::IllegalAction { id: action_id });
        }

        let target = action.absolute_target(self.current, self.player_count());
        Ok((ActionId::new(action_id as u8), action, target))
    }

    pub(super) fn play_turn(&mut self, action_id: usize) -> GameResult<StepOutcome> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        let (id, action, target) = self.decode_action(action_id)?;
        let actor = self.current;
        debug!(
            seat = %actor,
            id = %id,
            action = %action,
            target = ?target,
            "resolving play"
        );

        let record = self.resolve(id, action, target)?;
        self.history.push_back(record.clone());
        self.check_terminal()?;

        let snapshot = self.observe(actor);
        self.rotate(snapshot, Some(record))
    }

    /// Showdown on an empty deck, then decide whether the round is over.
    pub(super) fn check_terminal(&mut self) -> GameResult<()> {
        if self.deck.is_empty() {
            let mut held = Vec::with_capacity(self.player_count());
            for player in self.active_players().collect::<Vec<_>>() {
                held.push((player, self.concealed_card(player)?));
            }

            let best = held.iter().map(|(_, card)| card.value()).max().unwrap_or(0);
            for (player, card) in held {
                if card.value() < best {
                    debug!(seat = %player, card = %card, "lost the showdown");
                    self.eliminate(player)?;
                }
            }
        }

        let remaining: Vec<PlayerId> = self.active_players().collect();
        if remaining.is_empty() {
            return Err(GameError::NoActiveSeatsRemaining);
        }

        if remaining.len() == 1 || self.deck.is_empty() {
            self.game_over = true;
            self.winners = remaining;
            info!(
                winners = ?self.winners,
                plays = self.history.len(),
                "game over"
            );
        }
        Ok(())
    }

    /// Hand the turn to the next seat and report on it.
    ///
    /// The reward is computed after the seat's protection lapses and before
    /// its per-turn elimination list is cleared. A seat that is out, or any
    /// seat once the game is over, is terminated and does not draw.
    pub(super) fn rotate(
        &mut self,
        snapshot: Observation,
        record: Option<ActionRecord>,
    ) -> GameResult<StepOutcome> {
        let next = self.current.next(self.player_count());
        self.current = next;
        self.seats[next].set_safe(false);

        let reward = self.reward.reward(self, next);
        self.seats[next].clear_eliminations();

        let terminated = !self.seats[next].is_active() || self.game_over;
        if !terminated {
            let card = self.seats[next].draw(&mut self.deck)?;
            debug!(seat = %next, card = %card, "drew");
        }

        Ok(StepOutcome {
            observation: self.observe_current(),
            reward,
            terminated,
            diagnostics: StepDiagnostics {
                observation: snapshot,
                record,
            },
        })
    }
}
