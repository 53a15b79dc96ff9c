//! Core game state and progression rules.

pub mod constants;
pub mod engine;
pub mod game_state;
pub mod progression;

pub use constants::*;
pub use engine::*;
pub use game_state::*;
pub use progression::*;
