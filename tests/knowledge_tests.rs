//! Knowledge cache bookkeeping across plays, swaps and eliminations.

use love_letter::cards::Card;
use love_letter::core::{GameError, PlayerId};
use love_letter::games::{LoveLetterBuilder, LoveLetterGame};
use love_letter::rules::RulesEngine;
use love_letter::seats::Seat;

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

fn stacked(players: usize, start: u8, cards: Vec<Card>) -> LoveLetterGame {
    LoveLetterBuilder::new()
        .player_count(players)
        .starting_seat(p(start))
        .stacked_deck(cards)
        .build()
        .unwrap()
}

fn known(game: &LoveLetterGame, seat: u8) -> Vec<(PlayerId, Card)> {
    let mut entries: Vec<_> = game.seat(p(seat)).knowledge().iter().collect();
    entries.sort();
    entries
}

/// Seat 0 sees seat 1's Baron, then seat 1 trades hands with seat 2.
#[test]
fn test_king_swap_relabels_third_seat_knowledge() {
    let mut game = stacked(
        3,
        0,
        vec![
            Card::Guard,
            Card::Priest,
            Card::Handmaid,
            Card::Baron,
            Card::Prince,
            Card::King,
            Card::Guard,
            Card::Guard,
        ],
    );

    // Priest at +1.
    game.step(31).unwrap();
    assert_eq!(known(&game, 0), vec![(p(1), Card::Baron)]);

    // Seat 1 holds Baron + King; King at +1 trades with seat 2.
    assert_eq!(game.current_player(), p(1));
    game.step(46).unwrap();

    assert_eq!(game.seat(p(1)).hand().slots(), [Card::Prince, Card::Empty]);
    // Seat 2 has drawn a Guard for its turn.
    assert!(game.seat(p(2)).hand().contains(Card::Baron));

    // The Baron seat 0 saw now sits with seat 2.
    assert_eq!(known(&game, 0), vec![(p(2), Card::Baron)]);
    assert_eq!(known(&game, 1), vec![(p(2), Card::Baron)]);
    assert_eq!(known(&game, 2), vec![(p(1), Card::Prince)]);
}

/// Seat 0 knows both seats that trade; its two entries swap subjects.
#[test]
fn test_king_swap_with_both_participants_known() {
    let mut game = stacked(
        3,
        0,
        vec![
            Card::Guard,
            Card::Priest,
            Card::Priest,
            Card::Baron,
            Card::Prince,
            Card::Countess,
            Card::Guard,
            Card::Handmaid,
            Card::King,
            Card::Guard,
            Card::Guard,
        ],
    );

    // Seat 0: Priest at +1 sees the Baron.
    game.step(31).unwrap();
    // Seat 1: Baron + Countess, plays Countess.
    game.step(50).unwrap();
    // Seat 2: Prince + Guard, Guard at +1 guessing Princess misses seat 0.
    game.step(14).unwrap();
    // Seat 0: Priest + Handmaid, Priest at +2 sees the Prince.
    game.step(32).unwrap();
    assert_eq!(known(&game, 0), vec![(p(1), Card::Baron), (p(2), Card::Prince)]);

    // Seat 1: Baron + King, King at +1 trades with seat 2.
    game.step(46).unwrap();

    assert_eq!(known(&game, 0), vec![(p(1), Card::Prince), (p(2), Card::Baron)]);
    assert_eq!(game.seat(p(1)).card(), Ok(Some(Card::Prince)));
    // Seat 2 has drawn for its turn, so it holds two cards.
    assert!(game.seat(p(2)).hand().contains(Card::Baron));
}

/// Seat 2's Guard knocks out seat 1, which seat 0 had looked at.
#[test]
fn test_elimination_purges_knowledge() {
    let mut game = stacked(
        3,
        0,
        vec![
            Card::Guard,
            Card::Priest,
            Card::Handmaid,
            Card::Baron,
            Card::Guard,
            Card::Countess,
            Card::Prince,
            Card::Guard,
            Card::Guard,
        ],
    );

    game.step(31).unwrap();
    assert_eq!(known(&game, 0), vec![(p(1), Card::Baron)]);

    game.step(50).unwrap();

    // Seat 2: Guard + Prince, Guard at +2 (seat 1) guessing Baron.
    let outcome = game.step(16).unwrap();
    let record = outcome.diagnostics.record.unwrap();
    assert_eq!(record.target, Some(p(1)));
    assert_eq!(record.discard, Some(Card::Baron));

    assert!(!game.seat(p(1)).is_active());
    assert!(known(&game, 0).is_empty());
    assert_eq!(game.seat(p(2)).eliminated_this_turn(), &[p(1)]);
    assert!(!game.is_game_over());
}

/// Seat 1's Prince makes seat 0 discard the card seat 1 had seen.
#[test]
fn test_forced_discard_drops_knowledge() {
    let mut game = stacked(
        2,
        1,
        vec![
            Card::Guard,
            Card::Baron,
            Card::Priest,
            Card::Prince,
            Card::Guard,
            Card::Handmaid,
            Card::King,
        ],
    );

    // Seat 1: Priest + Prince, Priest at +1 sees the Baron.
    game.step(31).unwrap();
    assert_eq!(known(&game, 1), vec![(p(0), Card::Baron)]);

    // Seat 0: Baron + Guard, Guard at +1 guessing Handmaid misses.
    game.step(10).unwrap();
    assert_eq!(known(&game, 1), vec![(p(0), Card::Baron)]);

    // Seat 1: Prince + Handmaid, Prince at +1. Seat 0 redraws the last
    // card and the showdown follows.
    game.step(42).unwrap();
    assert!(known(&game, 1).is_empty());
    assert_eq!(game.seat(p(0)).hand().slots(), [Card::King, Card::Empty]);
}

#[test]
fn test_seat_level_cache_limits() {
    let mut seat = Seat::new(p(0), "Solo");
    seat.record_knowledge(p(1), Card::Guard).unwrap();
    seat.record_knowledge(p(2), Card::Priest).unwrap();
    seat.record_knowledge(p(3), Card::Baron).unwrap();

    // Re-learning a known seat overwrites in place.
    seat.record_knowledge(p(2), Card::King).unwrap();
    assert_eq!(seat.knowledge().len(), 3);
    assert_eq!(seat.knowledge().get(p(2)), Some(Card::King));

    assert_eq!(
        seat.record_knowledge(p(4), Card::Guard),
        Err(GameError::KnowledgeCacheOverflow {
            seat: p(0),
            target: p(4)
        })
    );

    seat.relabel_knowledge(p(1), p(4));
    assert_eq!(seat.knowledge().get(p(4)), Some(Card::Guard));
    assert!(!seat.knowledge().contains(p(1)));
}
