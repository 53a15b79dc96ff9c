use super::constants::{BASE_MULTIPLIER, DEFAULT_MUSIC_VOLUME, DEFAULT_SOUND_VOLUME};
use crate::skins::SkinId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Audio preferences.
///
/// The on/off flags live for one session only; the volumes are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsState {
    pub music_on: bool,
    pub sound_on: bool,
    pub music_volume: f64,
    pub sound_volume: f64,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            music_on: true,
            sound_on: true,
            music_volume: DEFAULT_MUSIC_VOLUME,
            sound_volume: DEFAULT_SOUND_VOLUME,
        }
    }
}

/// Clamp a volume into [0, 1]. Non-finite input yields `None`.
pub fn clamp_volume(value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// The whole player profile: balance, tier, skins and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub coins: u64,
    pub multiplier: u64,
    /// Number of multiplier tiers unlocked (0-3). Never decreases.
    pub upgrade_level: u8,
    pub settings: SettingsState,
    pub current_skin: SkinId,
    /// Owned skins. Always contains `SkinId::NONE`.
    pub purchased_skins: BTreeSet<SkinId>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh profile: no coins, x1, only the built-in skin owned and equipped.
    pub fn new() -> Self {
        Self {
            coins: 0,
            multiplier: BASE_MULTIPLIER,
            upgrade_level: 0,
            settings: SettingsState::default(),
            current_skin: SkinId::NONE,
            purchased_skins: BTreeSet::from([SkinId::NONE]),
        }
    }

    pub fn owns(&self, skin: SkinId) -> bool {
        skin == SkinId::NONE || self.purchased_skins.contains(&skin)
    }

    pub fn is_equipped(&self, skin: SkinId) -> bool {
        self.current_skin == skin
    }
}
