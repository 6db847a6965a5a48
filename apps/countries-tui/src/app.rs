//! Application state and main render loop

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use countries_core::{Action, DirectoryState, FlagSource, ViewState};

use crate::keybindings::{normal_mode_action, search_mode_action, KeyAction};
use crate::mode::Mode;
use crate::views::{CountryListView, HeroView, SearchView, View};
use crate::widgets::ModeIndicator;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, SEARCH)
    pub mode: Mode,
    /// Directory state; all data changes go through `DirectoryState::apply`
    pub state: DirectoryState,
    /// Search box contents as typed
    pub search_input: String,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Card list scroll position
    pub list_view: CountryListView,
    /// Whether rendered flags get checked in the background
    probe_flags: bool,
    /// (name, flag URL) pairs already handed out for probing
    probed: HashSet<(String, String)>,
}

impl App {
    /// Create a new application instance
    pub fn new(page_size: usize, probe_flags: bool) -> Self {
        Self {
            mode: Mode::Normal,
            state: DirectoryState::new(page_size),
            search_input: String::new(),
            show_help: false,
            list_view: CountryListView::new(),
            probe_flags,
            probed: HashSet::new(),
        }
    }

    /// Apply a directory action
    pub fn apply(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Flags of rendered cards that have not been probed yet.
    ///
    /// Each distinct (name, URL) image is returned at most once per session,
    /// so same-named entries with different flags are all checked. Names
    /// already marked broken are skipped.
    pub fn take_pending_probes(&mut self) -> Vec<(String, String)> {
        if !self.probe_flags || self.state.view_state() != ViewState::Loaded {
            return Vec::new();
        }

        let mut pending = Vec::new();
        for country in self.state.visible() {
            if let FlagSource::Remote(url) = self.state.flag_source(country) {
                let key = (country.name.clone(), url.to_string());
                if self.probed.insert(key) {
                    pending.push((country.name.clone(), url.to_string()));
                }
            }
        }
        pending
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let loaded = self.state.view_state() == ViewState::Loaded;
        let has_more = loaded && self.state.has_more();

        let mut constraints = vec![Constraint::Length(3)]; // Hero
        if loaded {
            constraints.push(Constraint::Length(3)); // Search
            constraints.push(Constraint::Min(0)); // Cards
            if has_more {
                constraints.push(Constraint::Length(1)); // Load More
            }
        } else {
            constraints.push(Constraint::Min(0));
        }
        constraints.push(Constraint::Length(1)); // Status line

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(size);

        HeroView.render(frame, chunks[0], &self.state);

        // Search box and list only exist once data has arrived
        match self.state.view_state() {
            ViewState::Loaded => {
                SearchView {
                    input: &self.search_input,
                    focused: self.mode == Mode::Search,
                }
                .render(frame, chunks[1]);
                self.list_view.render(frame, chunks[2], &self.state);
                if has_more {
                    self.list_view.render_load_more(frame, chunks[3]);
                }
            }
            ViewState::Loading | ViewState::Error => {}
        }

        self.render_status_line(frame, chunks[chunks.len() - 1]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let hint = match (self.mode, self.state.view_state()) {
            (Mode::Search, _) => "type to filter | Esc/Enter done | Ctrl-C quit",
            (Mode::Normal, ViewState::Loaded) => "/ search | m load more | j/k scroll | ? help | q quit",
            (Mode::Normal, _) => "? help | q quit",
        };

        let line = Line::from(vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::raw(" "),
            Span::raw(hint),
        ]);
        let status = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
World Countries - Help

Browsing:
  /       - Search by name, capital or language
  m       - Load more countries
  Enter   - Load more countries
  j/k     - Scroll cards
  ?       - Toggle this help
  q       - Quit

Searching:
  type    - Filter as you type
  Bksp    - Delete a character
  Esc     - Back to browsing (query is kept)
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code, modifiers),
            Mode::Search => self.handle_search_key(code, modifiers),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Some(action) = normal_mode_action(code, modifiers) else {
            return false;
        };
        let loaded = self.state.view_state() == ViewState::Loaded;

        match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::Cancel => self.show_help = false,
            KeyAction::EnterSearchMode if loaded => self.mode = Mode::Search,
            KeyAction::LoadMore if loaded && self.state.has_more() => {
                self.apply(Action::LoadMore);
            }
            KeyAction::MoveDown => self.list_view.scroll_down(self.state.visible().len()),
            KeyAction::MoveUp => self.list_view.scroll_up(),
            _ => {}
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if let Some(action) = search_mode_action(code, modifiers) {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Cancel => self.mode = Mode::Normal,
                KeyAction::MoveDown => self.list_view.scroll_down(self.state.visible().len()),
                KeyAction::MoveUp => self.list_view.scroll_up(),
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Backspace => {
                if self.search_input.pop().is_some() {
                    self.search_changed();
                }
            }
            // Ctrl/Alt chords are not text
            KeyCode::Char(c)
                if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT =>
            {
                self.search_input.push(c);
                self.search_changed();
            }
            _ => {}
        }
        false
    }

    fn search_changed(&mut self) {
        self.apply(Action::SearchChanged(self.search_input.clone()));
        self.list_view.reset();
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
