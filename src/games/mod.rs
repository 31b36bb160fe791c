//! Game implementations.

pub mod love_letter;

pub use love_letter::{LoveLetterBuilder, LoveLetterGame};
