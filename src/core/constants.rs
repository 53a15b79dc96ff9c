// Tier unlock thresholds (coins), indexed by the level they unlock minus one
pub const TIER_THRESHOLDS: [u64; 3] = [250, 1_000, 10_000];
pub const MAX_UPGRADE_LEVEL: u8 = 3;
pub const BASE_MULTIPLIER: u64 = 1;

// Default settings for a fresh profile
pub const DEFAULT_MUSIC_VOLUME: f64 = 0.5;
pub const DEFAULT_SOUND_VOLUME: f64 = 1.0;
pub const VOLUME_STEP: f64 = 0.1;

// Save record layout
pub const RECORD_FIELD_COUNT: usize = 7;
pub const RECORD_FIELD_SEPARATOR: &str = ",";
pub const SKIN_LIST_SEPARATOR: &str = "|";

// File locations
pub const APP_NAME: &str = "coin-clicker";
pub const SAVE_FILE_NAME: &str = "progress.txt";
pub const LOG_FILE_NAME: &str = "coin-clicker.log";
pub const SAVE_PATH_ENV: &str = "COIN_CLICKER_SAVE";

// UI timing
pub const INPUT_POLL_MS: u64 = 50;
pub const NOTIFICATION_DURATION_MS: u64 = 1_500;
