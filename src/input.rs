//! Input handling for the terminal front end.
//!
//! Turns key presses into engine commands or screen navigation. Nothing here
//! mutates `GameState`; commands go back to the caller for dispatch.

use crate::core::constants::{NOTIFICATION_DURATION_MS, VOLUME_STEP};
use crate::core::game_state::GameState;
use crate::error::GameError;
use crate::session::{Command, GameEvent};
use crate::skins;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Which screen is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Shop,
    Settings,
}

/// Rows of the settings screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Music,
    MusicVolume,
    Sound,
    SoundVolume,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Music,
        SettingsRow::MusicVolume,
        SettingsRow::Sound,
        SettingsRow::SoundVolume,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::Music => "Music",
            SettingsRow::MusicVolume => "Music volume",
            SettingsRow::Sound => "Sounds",
            SettingsRow::SoundVolume => "Sound volume",
        }
    }
}

/// A short-lived banner message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

/// Presentation-side state: screen, cursors and the active banner.
pub struct UiState {
    pub screen: Screen,
    pub shop_selected: usize,
    pub settings_selected: usize,
    pub notification: Option<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Main,
            shop_selected: 0,
            settings_selected: 0,
            notification: None,
        }
    }

    pub fn notify(&mut self, text: impl Into<String>, is_error: bool, duration: Duration) {
        self.notification = Some(Notification {
            text: text.into(),
            is_error,
            expires_at: Instant::now() + duration,
        });
    }

    /// Drop the banner once its time is up.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
    }

    pub fn selected_settings_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.settings_selected.min(SettingsRow::ALL.len() - 1)]
    }
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputResult {
    Continue,
    Dispatch(Command),
    Quit,
}

/// Main dispatcher. Global keys first, then the active screen.
pub fn handle_key(key: KeyEvent, ui: &mut UiState, state: &GameState) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Char('m') | KeyCode::Char('M') => {
            return InputResult::Dispatch(Command::SetMusicEnabled(!state.settings.music_on));
        }
        _ => {}
    }

    match ui.screen {
        Screen::Main => handle_main(key, ui),
        Screen::Shop => handle_shop(key, ui, state),
        Screen::Settings => handle_settings(key, ui, state),
    }
}

fn handle_main(key: KeyEvent, ui: &mut UiState) -> InputResult {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => InputResult::Dispatch(Command::Click),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            ui.screen = Screen::Shop;
            InputResult::Continue
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            ui.screen = Screen::Settings;
            InputResult::Continue
        }
        KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}

fn handle_shop(key: KeyEvent, ui: &mut UiState, state: &GameState) -> InputResult {
    let catalog = skins::all();
    ui.shop_selected = ui.shop_selected.min(catalog.len() - 1);
    let skin = catalog[ui.shop_selected].id;

    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
            ui.screen = Screen::Main;
            InputResult::Continue
        }
        KeyCode::Up | KeyCode::Left => {
            ui.shop_selected = ui.shop_selected.saturating_sub(1);
            InputResult::Continue
        }
        KeyCode::Down | KeyCode::Right => {
            ui.shop_selected = (ui.shop_selected + 1).min(catalog.len() - 1);
            InputResult::Continue
        }
        KeyCode::Char('b') | KeyCode::Char('B') => InputResult::Dispatch(Command::Purchase(skin)),
        // Owned skins are equipped, others are bought
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
            if state.owns(skin) {
                InputResult::Dispatch(Command::Equip(skin))
            } else if key.code == KeyCode::Enter {
                InputResult::Dispatch(Command::Purchase(skin))
            } else {
                InputResult::Continue
            }
        }
        _ => InputResult::Continue,
    }
}

fn handle_settings(key: KeyEvent, ui: &mut UiState, state: &GameState) -> InputResult {
    let settings = &state.settings;
    match key.code {
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('O') => {
            ui.screen = Screen::Main;
            InputResult::Continue
        }
        KeyCode::Up => {
            ui.settings_selected = ui.settings_selected.saturating_sub(1);
            InputResult::Continue
        }
        KeyCode::Down => {
            ui.settings_selected = (ui.settings_selected + 1).min(SettingsRow::ALL.len() - 1);
            InputResult::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => match ui.selected_settings_row() {
            SettingsRow::Music => InputResult::Dispatch(Command::SetMusicEnabled(!settings.music_on)),
            SettingsRow::Sound => InputResult::Dispatch(Command::SetSoundEnabled(!settings.sound_on)),
            _ => InputResult::Continue,
        },
        KeyCode::Left | KeyCode::Right | KeyCode::Char('-') | KeyCode::Char('+') => {
            let direction = match key.code {
                KeyCode::Left | KeyCode::Char('-') => -1.0,
                _ => 1.0,
            };
            match ui.selected_settings_row() {
                SettingsRow::MusicVolume => InputResult::Dispatch(Command::SetMusicVolume(
                    step_volume(settings.music_volume, direction),
                )),
                SettingsRow::SoundVolume => InputResult::Dispatch(Command::SetSoundVolume(
                    step_volume(settings.sound_volume, direction),
                )),
                _ => InputResult::Continue,
            }
        }
        _ => InputResult::Continue,
    }
}

/// Raise banners for the events worth telling the player about.
pub fn show_events(ui: &mut UiState, events: &[GameEvent]) {
    let duration = Duration::from_millis(NOTIFICATION_DURATION_MS);
    for event in events {
        match event {
            GameEvent::TierUnlocked(tier) => {
                ui.notify(format!("{} unlocked!", tier.badge()), false, duration);
            }
            GameEvent::SkinPurchased { skin, .. } => {
                let name = skins::lookup(*skin).map_or("Skin", |s| s.name);
                ui.notify(format!("{} purchased!", name), false, duration);
            }
            _ => {}
        }
    }
}

/// Banner for a rejected command.
pub fn show_error(ui: &mut UiState, error: &GameError) {
    let text = match error {
        GameError::InsufficientFunds { .. } => "Not enough coins!".to_string(),
        other => other.to_string(),
    };
    ui.notify(text, true, Duration::from_millis(NOTIFICATION_DURATION_MS));
}

/// Move a volume one step, snapped to one decimal place.
pub fn step_volume(current: f64, direction: f64) -> f64 {
    let stepped = current + direction * VOLUME_STEP;
    ((stepped * 10.0).round() / 10.0).clamp(0.0, 1.0)
}
