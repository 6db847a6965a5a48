//! Country card list with the "Load More" footer

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use countries_core::DirectoryState;

use crate::widgets::{CountryCard, CARD_HEIGHT};

pub const LOAD_MORE: &str = "Load More";

/// Country list view state
pub struct CountryListView {
    /// Index of the first card shown
    pub scroll: usize,
}

impl CountryListView {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn scroll_down(&mut self, visible: usize) {
        if self.scroll + 1 < visible {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Render the cards currently in view
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &DirectoryState) {
        let visible = state.visible();
        let title = format!("Countries ({} of {})", visible.len(), state.filtered().len());

        // Only whole cards that fit inside the borders
        let fits = (area.height.saturating_sub(2) as usize / CARD_HEIGHT).max(1);

        let lines: Vec<Line> = visible
            .iter()
            .skip(self.scroll)
            .take(fits)
            .flat_map(|&country| CountryCard::new(country, state.flag_source(country)).lines())
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    /// Render the pagination footer. Callers only show it when
    /// `state.has_more()` holds.
    pub fn render_load_more(&self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(Line::styled(
            format!("[ {LOAD_MORE} ]  (m)"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}

impl Default for CountryListView {
    fn default() -> Self {
        Self::new()
    }
}
