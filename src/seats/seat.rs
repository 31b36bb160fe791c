//! Per-seat mutable state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::knowledge::{CacheFull, KnowledgeCache};
use crate::cards::{Card, Deck, Hand};
use crate::core::{GameError, GameResult, PlayerId, MAX_PLAYERS};

/// Public status pair shown to every seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStatus {
    pub active: bool,
    pub safe: bool,
}

/// One seat at the table.
///
/// `safe` is set by Handmaid and cleared when this seat's next turn begins.
/// `eliminated_this_turn` lists seats knocked out by this seat's current
/// move sequence; it feeds reward functions, not legality.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Seat {
    id: PlayerId,
    name: String,
    active: bool,
    safe: bool,
    hand: Hand,
    play_history: Vec<Card>,
    eliminated_this_turn: SmallVec<[PlayerId; MAX_PLAYERS]>,
    knowledge: KnowledgeCache,
}

impl Seat {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            safe: false,
            hand: Hand::new(),
            play_history: Vec::new(),
            eliminated_this_turn: SmallVec::new(),
            knowledge: KnowledgeCache::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    #[must_use]
    pub fn status(&self) -> SeatStatus {
        SeatStatus {
            active: self.active,
            safe: self.safe,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The single card held between turns.
    pub fn card(&self) -> GameResult<Option<Card>> {
        self.hand.card()
    }

    #[must_use]
    pub fn play_history(&self) -> &[Card] {
        &self.play_history
    }

    /// Most recent voluntary play, `Empty` before the first one.
    #[must_use]
    pub fn last_played(&self) -> Card {
        self.play_history.last().copied().unwrap_or(Card::Empty)
    }

    #[must_use]
    pub fn eliminated_this_turn(&self) -> &[PlayerId] {
        &self.eliminated_this_turn
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeCache {
        &self.knowledge
    }

    /// Restore the seat for a fresh deal.
    pub fn reset(&mut self) {
        self.active = true;
        self.safe = false;
        self.hand = Hand::new();
        self.play_history.clear();
        self.eliminated_this_turn.clear();
        self.knowledge.clear();
    }

    pub fn draw(&mut self, deck: &mut Deck) -> GameResult<Card> {
        if self.hand.is_full() {
            return Err(GameError::HandFull);
        }
        let card = deck.draw()?;
        self.hand.add(card)?;
        Ok(card)
    }

    /// Remove a card from hand without recording it as a play.
    pub fn discard(&mut self, card: Card) -> GameResult<()> {
        self.hand.remove(card)
    }

    /// Remove a card from hand and append it to the play history.
    pub fn play(&mut self, card: Card) -> GameResult<()> {
        self.hand.remove(card)?;
        self.play_history.push(card);
        Ok(())
    }

    /// Mark the seat out of the round and surrender its hand.
    ///
    /// Returns the concealed card, if any was held.
    pub fn eliminate(&mut self) -> GameResult<Option<Card>> {
        let card = self.hand.card()?;
        self.active = false;
        self.hand = Hand::new();
        Ok(card)
    }

    pub fn set_safe(&mut self, safe: bool) {
        self.safe = safe;
    }

    pub(crate) fn swap_hands(&mut self, other: &mut Seat) {
        std::mem::swap(&mut self.hand, &mut other.hand);
    }

    pub(crate) fn note_elimination(&mut self, victim: PlayerId) {
        if !self.eliminated_this_turn.contains(&victim) {
            self.eliminated_this_turn.push(victim);
        }
    }

    pub(crate) fn clear_eliminations(&mut self) {
        self.eliminated_this_turn.clear();
    }

    /// Remember that `subject` holds `card`.
    pub fn record_knowledge(&mut self, subject: PlayerId, card: Card) -> GameResult<()> {
        if subject == self.id {
            return Err(GameError::invariant(format!(
                "{} cannot record knowledge about itself",
                self.id
            )));
        }
        self.knowledge
            .insert(subject, card)
            .map_err(|CacheFull| GameError::KnowledgeCacheOverflow {
                seat: self.id,
                target: subject,
            })
    }

    /// Forget everything known about `subject`.
    pub fn forget(&mut self, subject: PlayerId) -> Option<Card> {
        self.knowledge.remove(subject)
    }

    /// Forget `subject` only if the remembered card is `card`.
    pub fn forget_if(&mut self, subject: PlayerId, card: Card) -> bool {
        self.knowledge.forget_if(subject, card)
    }

    /// Follow a hand swap between `from` and `to`: knowledge about either
    /// seat's old hand now describes the other seat.
    pub fn relabel_knowledge(&mut self, from: PlayerId, to: PlayerId) {
        self.knowledge.relabel(from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(i: u8) -> Seat {
        Seat::new(PlayerId::new(i), format!("Player {}", i))
    }

    #[test]
    fn test_play_records_history() {
        let mut s = seat(0);
        let mut deck = Deck::stacked(vec![Card::Guard, Card::Priest, Card::Baron]).unwrap();
        s.draw(&mut deck).unwrap();
        s.draw(&mut deck).unwrap();

        assert_eq!(s.last_played(), Card::Empty);
        s.play(Card::Priest).unwrap();
        assert_eq!(s.play_history(), &[Card::Priest]);
        assert_eq!(s.card(), Ok(Some(Card::Baron)));
    }

    #[test]
    fn test_discard_is_not_a_play() {
        let mut s = seat(0);
        let mut deck = Deck::stacked(vec![Card::Guard, Card::Prince]).unwrap();
        s.draw(&mut deck).unwrap();
        s.discard(Card::Prince).unwrap();
        assert!(s.play_history().is_empty());
        assert!(s.hand().is_empty());
    }

    #[test]
    fn test_draw_into_full_hand_fails() {
        let mut s = seat(1);
        let mut deck = Deck::stacked(vec![Card::Guard, Card::Guard, Card::Guard, Card::Guard]).unwrap();
        s.draw(&mut deck).unwrap();
        s.draw(&mut deck).unwrap();
        assert_eq!(s.draw(&mut deck), Err(GameError::HandFull));
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_eliminate_returns_card() {
        let mut s = seat(2);
        let mut deck = Deck::stacked(vec![Card::Guard, Card::Countess]).unwrap();
        s.draw(&mut deck).unwrap();

        assert_eq!(s.eliminate(), Ok(Some(Card::Countess)));
        assert!(!s.is_active());
        assert!(s.hand().is_empty());
    }

    #[test]
    fn test_knowledge_about_self_is_rejected() {
        let mut s = seat(1);
        assert!(matches!(
            s.record_knowledge(PlayerId::new(1), Card::Guard),
            Err(GameError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_knowledge_overflow_maps_to_game_error() {
        let mut s = seat(0);
        for i in 1..=3 {
            s.record_knowledge(PlayerId::new(i), Card::Guard).unwrap();
        }
        assert_eq!(
            s.record_knowledge(PlayerId::new(4), Card::Guard),
            Err(GameError::KnowledgeCacheOverflow {
                seat: PlayerId::new(0),
                target: PlayerId::new(4),
            })
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = seat(0);
        s.record_knowledge(PlayerId::new(1), Card::King).unwrap();
        s.note_elimination(PlayerId::new(1));
        s.set_safe(true);
        let _ = s.eliminate();

        s.reset();
        assert!(s.is_active());
        assert!(!s.is_safe());
        assert!(s.knowledge().is_empty());
        assert!(s.eliminated_this_turn().is_empty());
    }

    #[test]
    fn test_note_elimination_deduplicates() {
        let mut s = seat(0);
        s.note_elimination(PlayerId::new(2));
        s.note_elimination(PlayerId::new(2));
        assert_eq!(s.eliminated_this_turn(), &[PlayerId::new(2)]);
        s.clear_eliminations();
        assert!(s.eliminated_this_turn().is_empty());
    }
}
