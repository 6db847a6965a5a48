//! Country card: flag source, name and details for one country.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use countries_core::{format_population, Country, FlagSource};

/// Lines per card, including the trailing blank separator
pub const CARD_HEIGHT: usize = 6;

/// A rendered country entry
pub struct CountryCard<'a> {
    country: &'a Country,
    flag: FlagSource<'a>,
}

impl<'a> CountryCard<'a> {
    pub fn new(country: &'a Country, flag: FlagSource<'a>) -> Self {
        Self { country, flag }
    }

    /// Card as text lines
    pub fn lines(&self) -> Vec<Line<'a>> {
        let label = Style::default().fg(Color::DarkGray);
        let flag_style = if self.flag.is_placeholder() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let languages = self.country.language_names().collect::<Vec<_>>().join(", ");

        vec![
            Line::from(vec![
                Span::styled("[flag] ", flag_style),
                Span::styled(self.flag.as_str().to_string(), flag_style),
                Span::styled(format!("  ({})", self.country.flag_alt()), label),
            ]),
            Line::from(Span::styled(
                self.country.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("  Capital: ", label),
                Span::raw(self.country.capital.clone()),
            ]),
            Line::from(vec![
                Span::styled(format!("  {}: ", self.country.language_label()), label),
                Span::raw(languages),
            ]),
            Line::from(vec![
                Span::styled("  Population: ", label),
                Span::raw(format_population(self.country.population)),
            ]),
            Line::default(),
        ]
    }
}
