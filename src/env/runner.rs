//! Whole-table match runner.
//!
//! Every seat is driven by its own `Policy`. The match keeps going until
//! every seat has received its terminal signal, so each seat's final reward
//! is collected.

use tracing::debug;

use crate::cards::Deck;
use crate::core::{ActionRecord, GameError, GameResult, PlayerMap};
use crate::games::LoveLetterGame;
use crate::nn::{Policy, RandomPolicy};
use crate::rules::{GameOutcome, RulesEngine, StepOutcome};

/// Ceiling on card plays per game. A full game never plays more cards
/// than the deck holds.
pub const DEFAULT_PLAY_LIMIT: usize = Deck::SIZE;

#[derive(Clone, Debug)]
pub struct MatchSummary {
    pub outcome: GameOutcome,
    /// Cards played, not counting rotations past finished seats.
    pub plays: usize,
    /// Sum of the rewards each seat received.
    pub rewards: PlayerMap<f64>,
    pub records: Vec<ActionRecord>,
}

pub struct Match<E: RulesEngine> {
    engine: E,
    policies: Vec<Box<dyn Policy>>,
    play_limit: usize,
}

impl<E: RulesEngine> Match<E> {
    /// One policy per seat, in seat order.
    pub fn new(engine: E, policies: Vec<Box<dyn Policy>>) -> GameResult<Self> {
        let seats = engine.config().player_count;
        if policies.len() != seats {
            return Err(GameError::InvalidConfig {
                reason: format!("{} policies for {} seats", policies.len(), seats),
            });
        }
        Ok(Self {
            engine,
            policies,
            play_limit: DEFAULT_PLAY_LIMIT,
        })
    }

    #[must_use]
    pub fn with_play_limit(mut self, limit: usize) -> Self {
        self.play_limit = limit;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Play the current game to the end.
    pub fn run(&mut self) -> GameResult<MatchSummary> {
        let seats = self.engine.config().player_count;
        let mut finished = PlayerMap::with_value(seats, false);
        let mut rewards = PlayerMap::with_value(seats, 0.0);
        let mut records = Vec::new();
        let mut plays = 0;
        let mut observation = self.engine.observe_current();

        loop {
            let seat = self.engine.current_player();

            let outcome = if self.engine.is_terminal().is_some() || !self.engine.current_is_active() {
                finished[seat] = true;
                if finished.iter().all(|(_, &done)| done) {
                    break;
                }
                self.engine.advance()?
            } else {
                if plays >= self.play_limit {
                    return Err(GameError::TurnLimitExceeded {
                        limit: self.play_limit,
                    });
                }

                let mask = self.engine.legal_mask();
                let id = self.policies[seat.index()]
                    .choose(&observation, &mask)
                    .ok_or_else(|| GameError::invariant(format!("no action chosen for {}", seat)))?;
                plays += 1;
                self.engine.step(id.index())?
            };

            let StepOutcome {
                observation: next,
                reward,
                diagnostics,
                ..
            } = outcome;
            rewards[self.engine.current_player()] += reward;
            records.extend(diagnostics.record);
            observation = next;
        }

        let outcome = self
            .engine
            .is_terminal()
            .ok_or_else(|| GameError::invariant("every seat finished before the game ended"))?;
        debug!(winners = ?outcome.winners, plays, "match finished");

        Ok(MatchSummary {
            outcome,
            plays,
            rewards,
            records,
        })
    }

    /// Re-deal and play another game with the same policies.
    pub fn rematch(&mut self) -> GameResult<MatchSummary> {
        self.engine.reset()?;
        self.run()
    }
}

/// A random policy per seat, each seeded from a fork of the table RNG.
pub fn random_policies(game: &mut LoveLetterGame) -> Vec<Box<dyn Policy>> {
    (0..game.player_count())
        .map(|_| Box::new(RandomPolicy::from_rng(game.fork_rng())) as Box<dyn Policy>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::PlayerId;
    use crate::games::LoveLetterBuilder;
    use crate::nn::FirstLegalPolicy;

    fn random_match(players: usize, seed: u64) -> Match<LoveLetterGame> {
        let mut game = LoveLetterBuilder::new()
            .player_count(players)
            .seed(seed)
            .build()
            .unwrap();
        let policies = random_policies(&mut game);
        Match::new(game, policies).unwrap()
    }

    #[test]
    fn test_policy_count_must_match() {
        let game = LoveLetterBuilder::new().player_count(3).build().unwrap();
        let policies: Vec<Box<dyn Policy>> = vec![Box::new(FirstLegalPolicy)];
        assert!(matches!(
            Match::new(game, policies),
            Err(GameError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_random_games_finish() {
        for players in 2..=4 {
            for seed in 0..20 {
                let summary = random_match(players, seed).run().unwrap();

                assert!(!summary.outcome.winners.is_empty());
                assert!(summary.plays <= DEFAULT_PLAY_LIMIT);
                assert_eq!(summary.records.len(), summary.plays);
            }
        }
    }

    #[test]
    fn test_seeded_matches_replay() {
        let a = random_match(4, 77).run().unwrap();
        let b = random_match(4, 77).run().unwrap();

        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn test_scripted_match() {
        let game = LoveLetterBuilder::new()
            .starting_seat(PlayerId::new(0))
            .stacked_deck(vec![Card::Handmaid, Card::Guard, Card::Princess, Card::Priest, Card::King])
            .build()
            .unwrap();
        let policies: Vec<Box<dyn Policy>> = vec![Box::new(FirstLegalPolicy), Box::new(FirstLegalPolicy)];
        let summary = Match::new(game, policies).unwrap().run().unwrap();

        // Lowest legal id is Guard at +1 guessing Priest, which hits.
        assert_eq!(summary.plays, 1);
        assert_eq!(summary.outcome.winners, vec![PlayerId::new(0)]);
        // Seat 1 got 0 when knocked out, seat 0 got 1 for surviving.
        assert_eq!(summary.rewards[PlayerId::new(0)], 1.0);
        assert_eq!(summary.rewards[PlayerId::new(1)], 0.0);
    }

    #[test]
    fn test_play_limit() {
        let mut runner = random_match(2, 5).with_play_limit(0);
        assert_eq!(runner.run().unwrap_err(), GameError::TurnLimitExceeded { limit: 0 });
    }

    #[test]
    fn test_rematch() {
        let mut runner = random_match(3, 9);
        runner.run().unwrap();
        let summary = runner.rematch().unwrap();
        assert!(!summary.outcome.winners.is_empty());
    }
}
