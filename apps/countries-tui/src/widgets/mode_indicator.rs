//! Mode indicator widget for the status line.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::mode::Mode;

/// A mode indicator widget that displays the current input mode.
///
/// - Normal: Blue
/// - Search: Green
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    /// Create a new mode indicator for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Get the display color for the current mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Search => Color::Green,
        }
    }

    /// Render as a styled span (for embedding in other widgets).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.mode.short_code()),
            Style::default()
                .fg(Color::White)
                .bg(Self::mode_color(self.mode))
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors() {
        assert_eq!(ModeIndicator::mode_color(Mode::Normal), Color::Blue);
        assert_eq!(ModeIndicator::mode_color(Mode::Search), Color::Green);
    }

    #[test]
    fn test_span_text() {
        assert_eq!(ModeIndicator::new(Mode::Search).as_span().content, "[SRC]");
    }
}
