//! Error types for the clicker.

use crate::skins::SkinId;
use std::io;
use thiserror::Error;

/// A rejected player command. The state is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough coins for skin {skin}: costs {price}, have {coins}")]
    InsufficientFunds { skin: SkinId, price: u64, coins: u64 },

    #[error("Skin {0} is not owned")]
    NotOwned(SkinId),

    #[error("No skin with index {0}")]
    UnknownSkin(SkinId),
}

/// Failure reading or writing the save record.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Could not read save: {0}")]
    Read(#[source] io::Error),

    #[error("Could not write save: {0}")]
    Write(#[source] io::Error),

    #[error("Malformed save field '{field}': {value:?}")]
    Malformed { field: &'static str, value: String },

    #[error("Could not determine a data directory for the save file")]
    NoSaveLocation,
}

impl PersistenceError {
    /// True when the save simply does not exist yet (first launch).
    pub fn is_missing(&self) -> bool {
        matches!(self, PersistenceError::Read(e) if e.kind() == io::ErrorKind::NotFound)
    }
}
