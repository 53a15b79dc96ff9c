use crate::core::game_state::GameState;
use crate::input::{SettingsRow, UiState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const VOLUME_BAR_WIDTH: usize = 10;

/// e.g. "[######----] 60%"
pub fn volume_bar(volume: f64) -> String {
    let filled = ((volume * VOLUME_BAR_WIDTH as f64).round() as usize).min(VOLUME_BAR_WIDTH);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(VOLUME_BAR_WIDTH - filled),
        (volume * 100.0).round() as u32
    )
}

fn on_off(on: bool) -> Span<'static> {
    if on {
        Span::styled("On", Style::default().fg(Color::Green))
    } else {
        Span::styled("Off", Style::default().fg(Color::Red))
    }
}

pub fn render_settings(frame: &mut Frame, area: Rect, state: &GameState, ui: &UiState) {
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let settings = &state.settings;
    let lines: Vec<Line> = SettingsRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == ui.settings_selected;
            let label_style = if selected {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            let value = match row {
                SettingsRow::Music => on_off(settings.music_on),
                SettingsRow::Sound => on_off(settings.sound_on),
                SettingsRow::MusicVolume => Span::raw(volume_bar(settings.music_volume)),
                SettingsRow::SoundVolume => Span::raw(volume_bar(settings.sound_volume)),
            };
            Line::from(vec![
                Span::styled(format!(" {:<14}", row.label()), label_style),
                Span::raw("  "),
                value,
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
