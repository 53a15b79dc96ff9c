//! Skin purchase and equip rules.

use super::types::{lookup, SkinId};
use crate::core::game_state::GameState;
use crate::error::GameError;

/// Result of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub skin: SkinId,
    pub price_paid: u64,
    /// false when the skin was already owned (nothing changed)
    pub newly_owned: bool,
}

/// Check if the player can afford a skin right now.
pub fn can_afford(state: &GameState, skin: SkinId) -> bool {
    match lookup(skin) {
        Some(def) => def.is_free() || state.coins >= def.price,
        None => false,
    }
}

/// Attempt to buy a skin, spending coins.
///
/// The built-in skin and skins already owned succeed without charging.
/// Free skins are claimed without touching the balance.
pub fn try_purchase(state: &mut GameState, skin: SkinId) -> Result<Purchase, GameError> {
    let def = lookup(skin).ok_or(GameError::UnknownSkin(skin))?;

    if state.owns(skin) {
        return Ok(Purchase {
            skin,
            price_paid: 0,
            newly_owned: false,
        });
    }

    if !def.is_free() && state.coins < def.price {
        return Err(GameError::InsufficientFunds {
            skin,
            price: def.price,
            coins: state.coins,
        });
    }

    state.coins -= def.price;
    state.purchased_skins.insert(skin);
    Ok(Purchase {
        skin,
        price_paid: def.price,
        newly_owned: true,
    })
}

/// Equip an owned skin. Returns the previously equipped skin.
pub fn try_equip(state: &mut GameState, skin: SkinId) -> Result<SkinId, GameError> {
    if !state.owns(skin) {
        return Err(GameError::NotOwned(skin));
    }
    let previous = state.current_skin;
    state.current_skin = skin;
    Ok(previous)
}
