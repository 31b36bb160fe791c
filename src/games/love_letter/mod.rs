//! Love Letter for 2-4 players.
//!
//! Sixteen cards, one burned face down. Each turn the current seat draws to
//! two cards and plays one:
//! - Guard: name a non-Guard card; a correct guess knocks the target out
//! - Priest: look at the target's hand
//! - Baron: compare hands, the lower card is out
//! - Handmaid: protection until your next turn
//! - Prince: the target discards and redraws
//! - King: trade hands
//! - Countess: must be played while holding Prince or King
//! - Princess: never played; discarding it knocks you out
//!
//! The round ends when one seat remains or the deck runs out, in which case
//! the highest card (or cards, on a tie) wins.

mod effects;
mod game;
mod turn;

pub use game::{LoveLetterBuilder, LoveLetterGame};
pub use turn::TargetOffsets;
