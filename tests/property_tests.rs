//! Randomized whole-game checks.
//!
//! Each case deals a seeded table and plays it out with a seeded random
//! policy, checking the table after every transition.

use proptest::prelude::*;

use love_letter::cards::{Card, Deck};
use love_letter::core::{PlayerId, KNOWLEDGE_CAPACITY};
use love_letter::env::{random_policies, Match};
use love_letter::games::{LoveLetterBuilder, LoveLetterGame};
use love_letter::nn::{Policy, RandomPolicy};
use love_letter::rules::RulesEngine;

fn check_knowledge(game: &LoveLetterGame) -> Result<(), TestCaseError> {
    for (observer, seat) in game.seats() {
        prop_assert!(seat.knowledge().len() <= KNOWLEDGE_CAPACITY);
        for (subject, card) in seat.knowledge().iter() {
            prop_assert_ne!(subject, observer);
            let held = game.seat(subject);
            prop_assert!(held.is_active(), "{} remembers {}, who is out", observer, subject);
            prop_assert!(
                held.hand().contains(card),
                "{} remembers {} for {}, hand is {:?}",
                observer,
                card,
                subject,
                held.hand().slots()
            );
        }
    }
    Ok(())
}

fn check_mask(game: &LoveLetterGame) -> Result<(), TestCaseError> {
    if game.is_game_over() || !game.current_is_active() {
        prop_assert_eq!(game.legal_mask().count_legal(), 0);
        return Ok(());
    }

    let mask = game.legal_mask();
    prop_assert!(mask.count_legal() > 0);
    prop_assert!(!mask.is_legal(0));

    let hand = game.seat(game.current_player()).hand();
    let forced = hand.contains(Card::Countess) && (hand.contains(Card::King) || hand.contains(Card::Prince));
    for id in mask.legal_ids() {
        let action = game.catalog().get(id.index()).unwrap();
        prop_assert!(hand.contains(action.card));
        if forced {
            prop_assert_eq!(action.card, Card::Countess);
        }
    }
    Ok(())
}

fn play_out(players: usize, seed: u64) -> Result<usize, TestCaseError> {
    let mut game = LoveLetterBuilder::new()
        .player_count(players)
        .seed(seed)
        .build()
        .unwrap();
    let mut policy = RandomPolicy::new(seed.wrapping_add(1));
    let mut plays = 0;

    check_knowledge(&game)?;
    check_mask(&game)?;

    while game.is_terminal().is_none() {
        if game.current_is_active() {
            let id = policy
                .choose(&game.observe_current(), &game.legal_mask())
                .unwrap();
            game.step(id.index()).unwrap();
            plays += 1;
        } else {
            game.advance().unwrap();
        }
        prop_assert!(plays < Deck::SIZE);
        check_knowledge(&game)?;
        check_mask(&game)?;
    }

    prop_assert!(!game.winners().is_empty());
    for &winner in game.winners() {
        prop_assert!(game.seat(winner).is_active());
    }
    prop_assert_eq!(game.history().len(), plays);
    Ok(plays)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_random_games_keep_invariants(seed in any::<u64>(), players in 2usize..=4) {
        play_out(players, seed)?;
    }

    #[test]
    fn prop_same_seed_same_game(seed in any::<u64>(), players in 2usize..=4) {
        let a = play_out(players, seed)?;
        let b = play_out(players, seed)?;
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_offsets_round_trip(origin in 0u8..4, seat in 0u8..4, players in 2usize..=4) {
        prop_assume!((origin as usize) < players && (seat as usize) < players);
        let origin = PlayerId::new(origin);
        let seat = PlayerId::new(seat);

        let offset = seat.offset_from(origin, players);
        prop_assert!((offset as usize) < players);
        prop_assert_eq!(PlayerId::from_offset(origin, offset, players), seat);
    }

    #[test]
    fn prop_every_seat_is_signalled(seed in any::<u64>(), players in 2usize..=4) {
        let mut game = LoveLetterBuilder::new()
            .player_count(players)
            .seed(seed)
            .build()
            .unwrap();
        let policies = random_policies(&mut game);
        let summary = Match::new(game, policies).unwrap().run().unwrap();

        prop_assert_eq!(summary.records.len(), summary.plays);
        for (_, reward) in summary.rewards.iter() {
            prop_assert!(reward.is_finite());
        }
    }
}
