use super::codec;
use crate::core::game_state::GameState;
use crate::error::PersistenceError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads and overwrites the single save record on disk.
///
/// Every save rewrites the whole file in place. There is no history, no
/// temp file and no rename, so an interrupted write can leave a damaged
/// record; loading treats that like any other unreadable save.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Writes the encoded state, creating the parent directory if needed.
    pub fn save(&self, state: &GameState) -> Result<(), PersistenceError> {
        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(PersistenceError::Write)?;
            }
        }
        fs::write(&self.save_path, codec::encode(state)).map_err(PersistenceError::Write)
    }

    /// Loads the state from disk.
    ///
    /// Returns an error if:
    /// - The file doesn't exist or can't be read
    /// - The record is malformed
    pub fn load(&self) -> Result<GameState, PersistenceError> {
        let record = fs::read_to_string(&self.save_path).map_err(PersistenceError::Read)?;
        codec::decode(&record)
    }

    /// Loads the state, falling back to a fresh profile on any failure.
    pub fn load_or_default(&self) -> GameState {
        match self.load() {
            Ok(state) => {
                info!(
                    path = %self.save_path.display(),
                    coins = state.coins,
                    level = state.upgrade_level,
                    "Loaded save"
                );
                state
            }
            Err(e) if e.is_missing() => {
                info!(path = %self.save_path.display(), "No save found, starting fresh");
                GameState::new()
            }
            Err(e) => {
                warn!(path = %self.save_path.display(), error = %e, "Save unreadable, starting fresh");
                GameState::new()
            }
        }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skins::SkinId;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> SaveManager {
        SaveManager::new(dir.path().join("progress.txt"))
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let mut original = GameState::new();
        original.coins = 31_337;
        original.upgrade_level = 2;
        original.multiplier = 3;
        original.purchased_skins.insert(SkinId(1));
        original.current_skin = SkinId(1);

        manager.save(&original).expect("save should succeed");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("load should succeed");
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_writes_single_line() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        manager.save(&GameState::new()).unwrap();
        let raw = fs::read_to_string(manager.path()).unwrap();
        assert_eq!(raw, "0,1,0,0.5,1.0,0,0");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        let mut state = GameState::new();
        state.coins = 123_456_789;
        manager.save(&state).unwrap();
        state.coins = 5;
        manager.save(&state).unwrap();
        let raw = fs::read_to_string(manager.path()).unwrap();
        assert!(raw.starts_with("5,"));
        assert_eq!(raw.lines().count(), 1);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path().join("nested").join("deeper").join("p.txt"));
        manager.save(&GameState::new()).unwrap();
        assert!(manager.save_exists());
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        let err = manager.load().unwrap_err();
        assert!(err.is_missing());
        assert_eq!(manager.load_or_default(), GameState::new());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        fs::write(manager.path(), "lots,of,junk").unwrap();
        assert!(matches!(
            manager.load(),
            Err(PersistenceError::Malformed { .. })
        ));
        assert_eq!(manager.load_or_default(), GameState::new());
    }

    #[test]
    fn test_save_into_directory_path_fails() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        assert!(matches!(
            manager.save(&GameState::new()),
            Err(PersistenceError::Write(_))
        ));
    }
}
