//! Coin Clicker - terminal incremental clicker.
//!
//! The library holds the progression engine, the save record codec and the
//! session that ties them together; the binary adds the terminal front end.

pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod persistence;
pub mod session;
pub mod skins;
pub mod ui;

pub use crate::core::engine::ProgressionEngine;
pub use crate::core::game_state::{GameState, SettingsState};
pub use crate::error::{GameError, PersistenceError};
pub use crate::session::{Command, GameEvent, Session};
