//! Search box

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const PLACEHOLDER: &str = "Search countries by name, capital or languages";

/// Search input view. Holds the raw text as typed.
pub struct SearchView<'a> {
    pub input: &'a str,
    pub focused: bool,
}

impl SearchView<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = if self.input.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.input)
        };
        let paragraph = paragraph.block(
            Block::default()
                .title("Search")
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(paragraph, area);

        if self.focused {
            let x = area.x + 1 + self.input.chars().count() as u16;
            frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}
