//! Seats: per-player state and the knowledge each seat holds about others.

pub mod knowledge;
pub mod seat;

pub use knowledge::{CacheFull, KnowledgeCache};
pub use seat::{Seat, SeatStatus};
