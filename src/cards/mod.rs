//! Card primitives: the card catalog, the shared deck and per-seat hands.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::Card;
pub use deck::Deck;
pub use hand::{Hand, HAND_CAPACITY};
