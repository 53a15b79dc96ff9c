//! Multiplier tiers and the click-driven unlock rule.
//!
//! Tiers are unlocked by the coin balance crossing fixed thresholds. Each
//! unlock raises `upgrade_level` by one and sets the multiplier for the new
//! level. Level 3 is terminal.

use super::constants::{MAX_UPGRADE_LEVEL, TIER_THRESHOLDS};

/// A multiplier tier the player has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub level: u8,
    pub multiplier: u64,
}

impl Tier {
    /// Badge text shown when this tier is active (empty for the base tier).
    pub fn badge(&self) -> &'static str {
        match self.level {
            0 => "",
            1 => "x2!",
            2 => "x3!",
            _ => "x4!",
        }
    }

    /// Badge colour as RGB.
    /// 1=green(#42f554), 2=blue(#42a1f5), 3=bright green(#28fc03)
    pub fn badge_rgb(&self) -> (u8, u8, u8) {
        match self.level {
            1 => (0x42, 0xf5, 0x54),
            2 => (0x42, 0xa1, 0xf5),
            3 => (0x28, 0xfc, 0x03),
            _ => (0x80, 0x80, 0x80),
        }
    }
}

/// Returns the per-click multiplier for an upgrade level.
///
/// 0→1, 1→2, 2→3, 3→4. Levels above the maximum are treated as the maximum.
pub fn multiplier_for_level(level: u8) -> u64 {
    u64::from(level.min(MAX_UPGRADE_LEVEL)) + 1
}

pub fn tier_for_level(level: u8) -> Tier {
    let level = level.min(MAX_UPGRADE_LEVEL);
    Tier {
        level,
        multiplier: multiplier_for_level(level),
    }
}

/// Coins needed to unlock the tier after `level`, or `None` at the top tier.
pub fn next_threshold(level: u8) -> Option<u64> {
    TIER_THRESHOLDS.get(level as usize).copied()
}

/// Decide which tier, if any, unlocks at this balance.
///
/// Thresholds are checked highest first (10000, 1000, 250), each gated on the
/// current level being below the tier it grants. Because the thresholds are
/// ascending, any of those checks passing means the balance has reached the
/// threshold for the very next level, so that is the one tested here. At most
/// one level is granted per call and the multiplier always follows the level.
pub fn check_unlock(coins: u64, upgrade_level: u8) -> Option<Tier> {
    let threshold = next_threshold(upgrade_level)?;
    if coins >= threshold {
        Some(tier_for_level(upgrade_level + 1))
    } else {
        None
    }
}
