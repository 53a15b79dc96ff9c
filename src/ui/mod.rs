pub mod settings_scene;
pub mod shop_scene;

use crate::core::game_state::GameState;
use crate::core::progression::{next_threshold, tier_for_level};
use crate::input::{Screen, UiState};
use crate::skins;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, state: &GameState, ui: &UiState, save_failed: bool) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Balance
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_balance(frame, v_chunks[0], state);

    match ui.screen {
        Screen::Main => draw_click_area(frame, v_chunks[1], state),
        Screen::Shop => shop_scene::render_shop(frame, v_chunks[1], state, ui.shop_selected),
        Screen::Settings => settings_scene::render_settings(frame, v_chunks[1], state, ui),
    }

    draw_footer(frame, v_chunks[2], ui.screen, save_failed);

    if let Some(notification) = &ui.notification {
        draw_notification(frame, size, &notification.text, notification.is_error);
    }
}

fn draw_balance(frame: &mut Frame, area: Rect, state: &GameState) {
    let tier = tier_for_level(state.upgrade_level);
    let mut spans = vec![
        Span::styled("Coins: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{}", state.coins),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if tier.level > 0 {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            tier.badge(),
            Style::default()
                .fg(rgb(tier.badge_rgb()))
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(next) = next_threshold(state.upgrade_level) {
        spans.push(Span::styled(
            format!("   next tier at {}", next),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// The big button. Its look follows the equipped skin.
fn draw_click_area(frame: &mut Frame, area: Rect, state: &GameState) {
    let skin = skins::lookup(state.current_skin).or_else(|| skins::lookup(skins::SkinId::NONE));
    let (color, label) = match skin {
        Some(def) if def.asset.image.is_some() => (rgb(def.asset.rgb), def.name),
        Some(def) => (rgb(def.asset.rgb), "CLICK!"),
        None => (Color::White, "CLICK!"),
    };

    let button = centered_rect(area, 30, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(button);
    frame.render_widget(block, button);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("+{} per click", state.multiplier),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, screen: Screen, save_failed: bool) {
    let help = match screen {
        Screen::Main => "[Space] Click  [S] Shop  [O] Settings  [M] Music  [Q] Quit",
        Screen::Shop => "[↑↓] Select  [Enter] Buy/Equip  [B] Buy  [E] Equip  [Esc] Back",
        Screen::Settings => "[↑↓] Select  [Enter] Toggle  [←→] Volume  [Esc] Back",
    };
    let mut spans = vec![Span::styled(help, Style::default().fg(Color::DarkGray))];
    if save_failed {
        spans.push(Span::styled(
            "  (progress not saved)",
            Style::default().fg(Color::Red),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_notification(frame: &mut Frame, area: Rect, text: &str, is_error: bool) {
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let banner = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + 1,
        width,
        3.min(area.height),
    );
    let color = if is_error { Color::Red } else { Color::Green };
    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        banner,
    );
}

/// A rect of at most `width` x `height` centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &GameState, ui: &UiState) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, state, ui, false))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(area, 30, 10), Rect::new(35, 20, 30, 10));
        let small = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(small, 30, 10), small);
    }

    #[test]
    fn test_main_screen_shows_balance_and_badge() {
        let mut state = GameState::new();
        state.coins = 1234;
        state.upgrade_level = 2;
        state.multiplier = 3;
        let text = render(&state, &UiState::new());
        assert!(text.contains("Coins: 1234"));
        assert!(text.contains("x3!"));
        assert!(text.contains("CLICK!"));
    }

    #[test]
    fn test_notification_drawn() {
        let state = GameState::new();
        let mut ui = UiState::new();
        ui.notify("Not enough coins!", true, std::time::Duration::from_secs(5));
        let text = render(&state, &ui);
        assert!(text.contains("Not enough coins!"));
    }
}
