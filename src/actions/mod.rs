//! The fixed-size discrete action space and its legality mask.

pub mod catalog;
pub mod mask;

pub use catalog::ActionCatalog;
pub use mask::ActionMask;
