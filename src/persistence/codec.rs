//! Single-line save record encoding.
//!
//! Record layout, comma separated, positional:
//! `coins,multiplier,upgrade_level,music_volume,sound_volume,current_skin,purchased_skins`
//! where `purchased_skins` is a `|`-joined list of skin indices.
//!
//! Decoding is positional: a record with fewer than `i + 1` fields gets the
//! default for field `i` and for every field after it. Any field that is
//! present but fails to parse rejects the whole record.

use crate::core::constants::{
    DEFAULT_MUSIC_VOLUME, DEFAULT_SOUND_VOLUME, MAX_UPGRADE_LEVEL, RECORD_FIELD_COUNT,
    RECORD_FIELD_SEPARATOR, SKIN_LIST_SEPARATOR,
};
use crate::core::game_state::{GameState, SettingsState};
use crate::core::progression::multiplier_for_level;
use crate::error::PersistenceError;
use crate::skins::SkinId;
use std::collections::BTreeSet;
use std::str::FromStr;

const FIELD_NAMES: [&str; RECORD_FIELD_COUNT] = [
    "coins",
    "multiplier",
    "upgrade_level",
    "music_volume",
    "sound_volume",
    "current_skin",
    "purchased_skins",
];

/// Encode a state as a save record (no trailing newline).
pub fn encode(state: &GameState) -> String {
    let skins = state
        .purchased_skins
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(SKIN_LIST_SEPARATOR);

    [
        state.coins.to_string(),
        state.multiplier.to_string(),
        state.upgrade_level.to_string(),
        format_volume(state.settings.music_volume),
        format_volume(state.settings.sound_volume),
        state.current_skin.to_string(),
        skins,
    ]
    .join(RECORD_FIELD_SEPARATOR)
}

/// Volumes are written with at least one decimal place ("1.0", "0.5").
fn format_volume(volume: f64) -> String {
    format!("{:?}", volume)
}

/// Decode a save record.
///
/// Session-only settings (music/sound on) come back as their defaults.
pub fn decode(record: &str) -> Result<GameState, PersistenceError> {
    let fields: Vec<&str> = record.trim().split(RECORD_FIELD_SEPARATOR).collect();

    let coins: u64 = parse_field(&fields, 0, 0)?;
    let multiplier: u64 = parse_field(&fields, 1, 1)?;
    let upgrade_level: u8 = parse_field(&fields, 2, 0)?;
    let music_volume = parse_volume(&fields, 3, DEFAULT_MUSIC_VOLUME)?;
    let sound_volume = parse_volume(&fields, 4, DEFAULT_SOUND_VOLUME)?;
    let current_skin = SkinId(parse_field(&fields, 5, 0)?);
    let purchased_skins = match fields.get(6) {
        Some(raw) => parse_skin_list(raw)?,
        None => BTreeSet::from([SkinId::NONE]),
    };

    let mut state = GameState {
        coins,
        multiplier,
        upgrade_level,
        settings: SettingsState {
            music_volume,
            sound_volume,
            ..SettingsState::default()
        },
        current_skin,
        purchased_skins,
    };
    normalize(&mut state);
    Ok(state)
}

/// Restore the state invariants on freshly decoded data.
///
/// A no-op for any state the engine could have produced.
fn normalize(state: &mut GameState) {
    state.purchased_skins.insert(SkinId::NONE);
    if !state.purchased_skins.contains(&state.current_skin) {
        state.current_skin = SkinId::NONE;
    }
    state.upgrade_level = state.upgrade_level.min(MAX_UPGRADE_LEVEL);
    state.multiplier = multiplier_for_level(state.upgrade_level);
}

fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    default: T,
) -> Result<T, PersistenceError> {
    match fields.get(index) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| malformed(index, raw)),
    }
}

fn parse_volume(fields: &[&str], index: usize, default: f64) -> Result<f64, PersistenceError> {
    let value: f64 = parse_field(fields, index, default)?;
    if !value.is_finite() {
        return Err(malformed(index, fields[index]));
    }
    Ok(value.clamp(0.0, 1.0))
}

fn parse_skin_list(raw: &str) -> Result<BTreeSet<SkinId>, PersistenceError> {
    raw.split(SKIN_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map(SkinId)
                .map_err(|_| malformed(6, raw))
        })
        .collect()
}

fn malformed(index: usize, raw: &str) -> PersistenceError {
    PersistenceError::Malformed {
        field: FIELD_NAMES[index],
        value: raw.to_string(),
    }
}
