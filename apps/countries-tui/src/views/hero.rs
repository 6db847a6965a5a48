//! Hero banner: title plus the load status line

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use countries_core::{DirectoryState, ViewState};

use super::View;

pub const TITLE: &str = "World Countries Data";

/// Hero view
pub struct HeroView;

impl View for HeroView {
    fn render(&self, frame: &mut Frame, area: Rect, state: &DirectoryState) {
        let message_color = match state.view_state() {
            ViewState::Loading => Color::Gray,
            ViewState::Loaded => Color::Green,
            ViewState::Error => Color::Red,
        };

        let text = vec![
            Line::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(state.hero_message(), Style::default().fg(message_color)),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }
}
