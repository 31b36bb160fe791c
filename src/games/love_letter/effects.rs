//! Card effects and the knowledge bookkeeping they trigger.
//!
//! Knowledge stays truthful through four events:
//! - a seat shows a card (play or forced discard): observers who remembered
//!   that card in its hand forget it
//! - a seat is eliminated: everyone forgets it
//! - a King swap: the two participants learn each other's new card, and
//!   every other observer's entries follow the hands they describe
//! - a Priest look: the actor learns the target's card

use tracing::debug;

use super::game::LoveLetterGame;
use crate::cards::Card;
use crate::core::{Action, ActionId, ActionRecord, GameError, GameResult, PlayerId};

impl LoveLetterGame {
    /// Apply a validated play for the current seat.
    pub(super) fn resolve(
        &mut self,
        id: ActionId,
        action: Action,
        target: Option<PlayerId>,
    ) -> GameResult<ActionRecord> {
        let actor = self.current;
        let mut record = ActionRecord::new(id, action, actor, target);

        self.play_card(actor, action.card)?;

        match (action.card, target) {
            (Card::Guard, Some(target)) => {
                let held = self.concealed_card(target)?;
                if Some(held) == action.guess {
                    record.discarding_player = Some(target);
                    record.discard = Some(held);
                    self.eliminate(target)?;
                }
            }
            (Card::Priest, Some(target)) => self.learn(actor, target)?,
            (Card::Baron, Some(target)) => self.baron(actor, target, &mut record)?,
            (Card::Prince, Some(target)) => self.prince(target, &mut record)?,
            (Card::King, Some(target)) => self.king(actor, target)?,
            (Card::Handmaid, _) => self.seats[actor].set_safe(true),
            (Card::Countess, _) => {}
            (card, None) if card.takes_target() => {
                debug!(seat = %actor, card = %card, "no valid target, card has no effect");
            }
            (card, _) => {
                return Err(GameError::invariant(format!("{} cannot be resolved as a play", card)));
            }
        }

        Ok(record)
    }

    /// The single card a seat holds between plays.
    pub(super) fn concealed_card(&self, player: PlayerId) -> GameResult<Card> {
        self.seats[player]
            .card()?
            .ok_or_else(|| GameError::invariant(format!("{} holds no card", player)))
    }

    fn play_card(&mut self, player: PlayerId, card: Card) -> GameResult<()> {
        self.seats[player].play(card)?;
        self.reveal(player, card);
        Ok(())
    }

    /// Force a card out of a hand without counting it as a play.
    fn discard_from(&mut self, player: PlayerId, card: Card) -> GameResult<()> {
        self.seats[player].discard(card)?;
        self.reveal(player, card);
        Ok(())
    }

    /// Put a card on the ledger and drop private knowledge it made public.
    fn reveal(&mut self, player: PlayerId, card: Card) {
        self.discard_pile.push_back(card);
        for (observer, seat) in self.seats.iter_mut() {
            if observer != player && seat.forget_if(player, card) {
                debug!(observer = %observer, subject = %player, card = %card, "knowledge made public");
            }
        }
    }

    /// Take a seat out of the round.
    ///
    /// Its last card goes to the ledger, every other seat forgets it, and the
    /// current seat is credited unless it knocked itself out.
    pub(super) fn eliminate(&mut self, player: PlayerId) -> GameResult<()> {
        if let Some(card) = self.seats[player].eliminate()? {
            self.discard_pile.push_back(card);
        }

        let current = self.current;
        if player != current {
            self.seats[current].note_elimination(player);
        }

        for (observer, seat) in self.seats.iter_mut() {
            if observer != player {
                seat.forget(player);
            }
        }

        debug!(seat = %player, by = %current, "eliminated");
        Ok(())
    }

    /// `observer` learns the card `subject` currently holds.
    fn learn(&mut self, observer: PlayerId, subject: PlayerId) -> GameResult<()> {
        let seat = &self.seats[subject];
        if !seat.is_active() || seat.is_safe() {
            return Err(GameError::invariant(format!(
                "{} cannot learn about {}: out of the round or protected",
                observer, subject
            )));
        }

        let card = self.concealed_card(subject)?;
        self.seats[observer].record_knowledge(subject, card)?;
        debug!(observer = %observer, subject = %subject, card = %card, "learned card");
        Ok(())
    }

    fn baron(&mut self, actor: PlayerId, target: PlayerId, record: &mut ActionRecord) -> GameResult<()> {
        let mine = self.concealed_card(actor)?;
        let theirs = self.concealed_card(target)?;

        let (loser, card) = match mine.value().cmp(&theirs.value()) {
            std::cmp::Ordering::Greater => (target, theirs),
            std::cmp::Ordering::Less => (actor, mine),
            std::cmp::Ordering::Equal => return Ok(()),
        };

        record.discarding_player = Some(loser);
        record.discard = Some(card);
        self.eliminate(loser)
    }

    fn prince(&mut self, target: PlayerId, record: &mut ActionRecord) -> GameResult<()> {
        let card = self.concealed_card(target)?;
        self.discard_from(target, card)?;
        record.discarding_player = Some(target);
        record.discard = Some(card);

        if card == Card::Princess {
            return self.eliminate(target);
        }

        match self.seats[target].draw(&mut self.deck) {
            Ok(drawn) => {
                debug!(seat = %target, card = %drawn, "drew replacement");
                Ok(())
            }
            Err(GameError::DeckExhausted) => {
                debug!(seat = %target, "no replacement left in the deck");
                self.eliminate(target)
            }
            Err(err) => Err(err),
        }
    }

    fn king(&mut self, actor: PlayerId, target: PlayerId) -> GameResult<()> {
        if actor == target {
            return Err(GameError::invariant(format!("{} cannot trade with itself", actor)));
        }
        // Both hands must hold exactly one card to trade.
        self.concealed_card(actor)?;
        self.concealed_card(target)?;

        let (a, b) = self.seats.pair_mut(actor, target);
        a.swap_hands(b);

        self.learn(actor, target)?;
        self.learn(target, actor)?;

        for (observer, seat) in self.seats.iter_mut() {
            if observer != actor && observer != target {
                seat.relabel_knowledge(actor, target);
            }
        }
        Ok(())
    }
}
