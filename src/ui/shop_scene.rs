//! Skin shop rendering.

use super::rgb;
use crate::core::game_state::GameState;
use crate::skins::{self, can_afford, SkinDefinition, SkinId};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Price column text for a catalog entry.
pub fn price_label(skin: &SkinDefinition) -> String {
    if skin.id == SkinId::NONE {
        "Priceless!".to_string()
    } else if skin.is_free() {
        "Free!".to_string()
    } else {
        format!("{} coins", skin.price)
    }
}

/// Status column text. Exactly one entry reads "Equipped".
pub fn status_label(skin: &SkinDefinition, state: &GameState) -> &'static str {
    if state.is_equipped(skin.id) {
        "Equipped"
    } else if state.owns(skin.id) {
        "Owned"
    } else if skin.is_free() {
        "Claim"
    } else if can_afford(state, skin.id) {
        "Buy"
    } else {
        "Locked"
    }
}

pub fn render_shop(frame: &mut Frame, area: Rect, state: &GameState, selected: usize) {
    let block = Block::default()
        .title(" Shop ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = skins::all()
        .iter()
        .enumerate()
        .map(|(i, skin)| {
            let status = status_label(skin, state);
            let status_color = match status {
                "Equipped" => Color::Green,
                "Owned" => Color::White,
                "Buy" | "Claim" => Color::Yellow,
                _ => Color::DarkGray,
            };
            let marker = if i == selected { "> " } else { "  " };
            let name_style = if i == selected {
                Style::default()
                    .fg(rgb(skin.asset.rgb))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(rgb(skin.asset.rgb))
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<10}", skin.name), name_style),
                Span::styled(
                    format!("{:>14}  ", price_label(skin)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(status, Style::default().fg(status_color)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
