//! The progression engine: the single owner and mutator of `GameState`.
//!
//! Every operation runs to completion synchronously. Failed operations leave
//! the state exactly as it was.

use super::game_state::{clamp_volume, GameState};
use super::progression::{check_unlock, tier_for_level, Tier};
use crate::error::GameError;
use crate::skins::{self, Purchase, SkinId};
use tracing::{debug, info};

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub earned: u64,
    pub coins: u64,
    /// Set when this click unlocked a new multiplier tier.
    pub unlocked: Option<Tier>,
}

#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    state: GameState,
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

impl ProgressionEngine {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Currently active multiplier tier.
    pub fn tier(&self) -> Tier {
        tier_for_level(self.state.upgrade_level)
    }

    /// Add one click's worth of coins, then apply at most one tier unlock.
    pub fn register_click(&mut self) -> ClickOutcome {
        let earned = self.state.multiplier;
        self.state.coins = self.state.coins.saturating_add(earned);

        let unlocked = check_unlock(self.state.coins, self.state.upgrade_level);
        if let Some(tier) = unlocked {
            self.state.upgrade_level = tier.level;
            self.state.multiplier = tier.multiplier;
            info!(
                level = tier.level,
                multiplier = tier.multiplier,
                coins = self.state.coins,
                "Tier unlocked"
            );
        }

        ClickOutcome {
            earned,
            coins: self.state.coins,
            unlocked,
        }
    }

    /// Buy a skin. A newly bought skin is equipped straight away.
    pub fn purchase_skin(&mut self, skin: SkinId) -> Result<Purchase, GameError> {
        let purchase = skins::try_purchase(&mut self.state, skin).map_err(|e| {
            debug!(%skin, error = %e, "Purchase rejected");
            e
        })?;

        if purchase.newly_owned {
            self.state.current_skin = skin;
            info!(
                %skin,
                price = purchase.price_paid,
                coins = self.state.coins,
                "Skin purchased and equipped"
            );
        }
        Ok(purchase)
    }

    /// Equip an owned skin. Returns the skin it replaced.
    pub fn equip_skin(&mut self, skin: SkinId) -> Result<SkinId, GameError> {
        let previous = skins::try_equip(&mut self.state, skin).map_err(|e| {
            debug!(%skin, error = %e, "Equip rejected");
            e
        })?;
        info!(%skin, %previous, "Skin equipped");
        Ok(previous)
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.state.settings.music_on = enabled;
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.state.settings.sound_on = enabled;
    }

    /// Set the music volume, clamped to [0, 1]. Returns the stored value.
    pub fn set_music_volume(&mut self, volume: f64) -> f64 {
        if let Some(v) = clamp_volume(volume) {
            self.state.settings.music_volume = v;
        }
        self.state.settings.music_volume
    }

    /// Set the sound volume, clamped to [0, 1]. Returns the stored value.
    pub fn set_sound_volume(&mut self, volume: f64) -> f64 {
        if let Some(v) = clamp_volume(volume) {
            self.state.settings.sound_volume = v;
        }
        self.state.settings.sound_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_until(engine: &mut ProgressionEngine, coins: u64) {
        while engine.state().coins < coins {
            engine.register_click();
        }
    }

    #[test]
    fn test_click_adds_multiplier() {
        let mut engine = ProgressionEngine::default();
        let outcome = engine.register_click();
        assert_eq!(outcome.earned, 1);
        assert_eq!(outcome.coins, 1);
        assert!(outcome.unlocked.is_none());
    }

    #[test]
    fn test_first_unlock_at_250() {
        let mut engine = ProgressionEngine::default();
        for _ in 0..249 {
            assert!(engine.register_click().unlocked.is_none());
        }
        let outcome = engine.register_click();
        assert_eq!(outcome.coins, 250);
        assert_eq!(outcome.unlocked, Some(Tier { level: 1, multiplier: 2 }));
        assert_eq!(engine.state().multiplier, 2);
        assert_eq!(engine.register_click().earned, 2);
    }

    #[test]
    fn test_threshold_progression() {
        let mut engine = ProgressionEngine::default();
        click_until(&mut engine, 250);
        assert_eq!(engine.state().upgrade_level, 1);
        click_until(&mut engine, 1_000);
        assert_eq!(engine.state().upgrade_level, 2);
        assert_eq!(engine.state().multiplier, 3);
        click_until(&mut engine, 10_000);
        assert_eq!(engine.state().upgrade_level, 3);
        assert_eq!(engine.state().multiplier, 4);
        click_until(&mut engine, 50_000);
        assert_eq!(engine.state().upgrade_level, 3);
        assert_eq!(engine.state().multiplier, 4);
    }

    #[test]
    fn test_one_unlock_per_click_from_high_balance() {
        let mut state = GameState::new();
        state.coins = 20_000;
        let mut engine = ProgressionEngine::new(state);
        assert_eq!(engine.register_click().unlocked.map(|t| t.level), Some(1));
        assert_eq!(engine.register_click().unlocked.map(|t| t.level), Some(2));
        assert_eq!(engine.register_click().unlocked.map(|t| t.level), Some(3));
        assert_eq!(engine.register_click().unlocked, None);
    }

    #[test]
    fn test_click_saturates_at_max() {
        let mut state = GameState::new();
        state.coins = u64::MAX - 1;
        state.upgrade_level = 3;
        state.multiplier = 4;
        let mut engine = ProgressionEngine::new(state);
        assert_eq!(engine.register_click().coins, u64::MAX);
    }

    #[test]
    fn test_purchase_equips_new_skin() {
        let mut state = GameState::new();
        state.coins = 35_000;
        let mut engine = ProgressionEngine::new(state);
        let purchase = engine.purchase_skin(SkinId(2)).unwrap();
        assert!(purchase.newly_owned);
        assert_eq!(engine.state().coins, 0);
        assert_eq!(engine.state().current_skin, SkinId(2));
    }

    #[test]
    fn test_purchase_guard_keeps_state() {
        let mut state = GameState::new();
        state.coins = 100;
        let mut engine = ProgressionEngine::new(state);
        let before = engine.state().clone();
        assert!(matches!(
            engine.purchase_skin(SkinId(1)),
            Err(GameError::InsufficientFunds { .. })
        ));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_repurchase_does_not_reequip() {
        let mut state = GameState::new();
        state.coins = 25_000;
        let mut engine = ProgressionEngine::new(state);
        engine.purchase_skin(SkinId(1)).unwrap();
        engine.equip_skin(SkinId::NONE).unwrap();
        engine.purchase_skin(SkinId(1)).unwrap();
        assert_eq!(engine.state().current_skin, SkinId::NONE);
    }

    #[test]
    fn test_equip_guard() {
        let mut engine = ProgressionEngine::default();
        assert_eq!(
            engine.equip_skin(SkinId(2)),
            Err(GameError::NotOwned(SkinId(2)))
        );
        assert_eq!(engine.equip_skin(SkinId::NONE), Ok(SkinId::NONE));
    }

    #[test]
    fn test_settings_setters() {
        let mut engine = ProgressionEngine::default();
        engine.set_music_enabled(false);
        engine.set_sound_enabled(false);
        assert!(!engine.state().settings.music_on);
        assert!(!engine.state().settings.sound_on);

        assert_eq!(engine.set_music_volume(0.25), 0.25);
        assert_eq!(engine.set_sound_volume(1.5), 1.0);
        assert_eq!(engine.set_sound_volume(-1.0), 0.0);
        // Non-finite input is ignored
        assert_eq!(engine.set_music_volume(f64::NAN), 0.25);
    }
}
