//! A play session: the engine plus the save file it writes through to.
//!
//! Every command that succeeds is followed by a save, and `shutdown` saves
//! once more. Rejected commands change nothing and are not saved. A failed
//! write is logged and remembered; the in-memory state stays authoritative.

use crate::core::engine::ProgressionEngine;
use crate::core::game_state::{GameState, SettingsState};
use crate::core::progression::Tier;
use crate::error::GameError;
use crate::persistence::SaveManager;
use crate::skins::SkinId;
use tracing::{error, info};

/// A discrete input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Click,
    Purchase(SkinId),
    Equip(SkinId),
    SetMusicEnabled(bool),
    SetSoundEnabled(bool),
    SetMusicVolume(f64),
    SetSoundVolume(f64),
}

/// Something the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    CoinsChanged { coins: u64, delta: i64 },
    TierUnlocked(Tier),
    SkinPurchased { skin: SkinId, price: u64 },
    SkinEquipped { skin: SkinId, previous: SkinId },
    SettingsChanged(SettingsState),
}

pub struct Session {
    engine: ProgressionEngine,
    saves: SaveManager,
    last_save_failed: bool,
}

impl Session {
    /// Start a session from whatever the save file holds (or a fresh profile).
    pub fn open(saves: SaveManager) -> Self {
        let state = saves.load_or_default();
        Self::new(ProgressionEngine::new(state), saves)
    }

    pub fn new(engine: ProgressionEngine, saves: SaveManager) -> Self {
        Self {
            engine,
            saves,
            last_save_failed: false,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    pub fn save_manager(&self) -> &SaveManager {
        &self.saves
    }

    /// True if the most recent write to disk failed.
    pub fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    /// Apply one command and persist if it succeeded.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<GameEvent>, GameError> {
        let events = self.apply(command)?;
        self.persist();
        Ok(events)
    }

    fn apply(&mut self, command: Command) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();
        match command {
            Command::Click => {
                let outcome = self.engine.register_click();
                events.push(GameEvent::CoinsChanged {
                    coins: outcome.coins,
                    delta: outcome.earned as i64,
                });
                if let Some(tier) = outcome.unlocked {
                    events.push(GameEvent::TierUnlocked(tier));
                }
            }
            Command::Purchase(skin) => {
                let previous = self.engine.state().current_skin;
                let purchase = self.engine.purchase_skin(skin)?;
                if purchase.price_paid > 0 {
                    events.push(GameEvent::CoinsChanged {
                        coins: self.engine.state().coins,
                        delta: -(purchase.price_paid as i64),
                    });
                }
                if purchase.newly_owned {
                    events.push(GameEvent::SkinPurchased {
                        skin,
                        price: purchase.price_paid,
                    });
                    events.push(GameEvent::SkinEquipped { skin, previous });
                }
            }
            Command::Equip(skin) => {
                let previous = self.engine.equip_skin(skin)?;
                events.push(GameEvent::SkinEquipped { skin, previous });
            }
            Command::SetMusicEnabled(on) => {
                self.engine.set_music_enabled(on);
                events.push(self.settings_changed());
            }
            Command::SetSoundEnabled(on) => {
                self.engine.set_sound_enabled(on);
                events.push(self.settings_changed());
            }
            Command::SetMusicVolume(v) => {
                self.engine.set_music_volume(v);
                events.push(self.settings_changed());
            }
            Command::SetSoundVolume(v) => {
                self.engine.set_sound_volume(v);
                events.push(self.settings_changed());
            }
        }
        Ok(events)
    }

    fn settings_changed(&self) -> GameEvent {
        GameEvent::SettingsChanged(self.engine.state().settings.clone())
    }

    fn persist(&mut self) {
        match self.saves.save(self.engine.state()) {
            Ok(()) => self.last_save_failed = false,
            Err(e) => {
                if !self.last_save_failed {
                    error!(path = %self.saves.path().display(), error = %e, "Save failed");
                }
                self.last_save_failed = true;
            }
        }
    }

    /// End the session with a final save. Returns the final state.
    pub fn shutdown(mut self) -> GameState {
        self.persist();
        info!(
            coins = self.engine.state().coins,
            saved = !self.last_save_failed,
            "Session ended"
        );
        self.engine.into_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence;
    use std::fs;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> Session {
        Session::open(SaveManager::new(dir.path().join("progress.txt")))
    }

    fn read_record(session: &Session) -> String {
        fs::read_to_string(session.save_manager().path()).unwrap()
    }

    #[test]
    fn test_click_persists() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let events = session.dispatch(Command::Click).unwrap();
        assert_eq!(events, vec![GameEvent::CoinsChanged { coins: 1, delta: 1 }]);
        assert!(read_record(&session).starts_with("1,1,0,"));
    }

    #[test]
    fn test_tier_unlock_event() {
        let dir = TempDir::new().unwrap();
        let mut state = GameState::new();
        state.coins = 249;
        let mut session = Session::new(
            ProgressionEngine::new(state),
            SaveManager::new(dir.path().join("p.txt")),
        );
        let events = session.dispatch(Command::Click).unwrap();
        assert!(events.contains(&GameEvent::TierUnlocked(Tier {
            level: 1,
            multiplier: 2
        })));
        assert_eq!(read_record(&session), "250,2,1,0.5,1.0,0,0");
    }

    #[test]
    fn test_rejected_command_not_persisted() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let err = session.dispatch(Command::Purchase(SkinId(1))).unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { .. }));
        assert!(!session.save_manager().save_exists());

        let err = session.dispatch(Command::Equip(SkinId(2))).unwrap_err();
        assert_eq!(err, GameError::NotOwned(SkinId(2)));
        assert!(!session.save_manager().save_exists());
    }

    #[test]
    fn test_purchase_events_and_record() {
        let dir = TempDir::new().unwrap();
        let mut state = GameState::new();
        state.coins = 25_000;
        let mut session = Session::new(
            ProgressionEngine::new(state),
            SaveManager::new(dir.path().join("p.txt")),
        );
        let events = session.dispatch(Command::Purchase(SkinId(1))).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::CoinsChanged {
                    coins: 0,
                    delta: -25_000
                },
                GameEvent::SkinPurchased {
                    skin: SkinId(1),
                    price: 25_000
                },
                GameEvent::SkinEquipped {
                    skin: SkinId(1),
                    previous: SkinId::NONE
                },
            ]
        );
        assert_eq!(read_record(&session), "0,1,0,0.5,1.0,1,0|1");
    }

    #[test]
    fn test_builtin_purchase_is_silent_success() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let events = session.dispatch(Command::Purchase(SkinId::NONE)).unwrap();
        assert!(events.is_empty());
        assert!(session.save_manager().save_exists());
    }

    #[test]
    fn test_settings_persist_volumes_only() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        session.dispatch(Command::SetMusicEnabled(false)).unwrap();
        session.dispatch(Command::SetMusicVolume(0.2)).unwrap();
        session.dispatch(Command::SetSoundVolume(3.0)).unwrap();
        assert_eq!(read_record(&session), "0,1,0,0.2,1.0,0,0");

        let reopened = session_in(&dir);
        assert!(reopened.state().settings.music_on);
        assert_eq!(reopened.state().settings.music_volume, 0.2);
    }

    #[test]
    fn test_shutdown_persists_final_state() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir);
        let path = session.save_manager().path().to_path_buf();
        assert!(!path.exists());
        let final_state = session.shutdown();
        let on_disk = persistence::decode(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(on_disk, final_state);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let dir = TempDir::new().unwrap();
        // Saving to a directory path always fails
        let mut session = Session::open(SaveManager::new(dir.path()));
        session.dispatch(Command::Click).unwrap();
        session.dispatch(Command::Click).unwrap();
        assert!(session.last_save_failed());
        assert_eq!(session.state().coins, 2);
    }

    #[test]
    fn test_reopen_restores_progress() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        for _ in 0..300 {
            session.dispatch(Command::Click).unwrap();
        }
        let saved = session.shutdown();

        let reopened = session_in(&dir);
        assert_eq!(reopened.state().coins, saved.coins);
        assert_eq!(reopened.state().upgrade_level, 1);
        assert_eq!(reopened.state().multiplier, 2);
    }
}
