//! TUI widgets

mod country_card;
mod mode_indicator;

pub use country_card::{CountryCard, CARD_HEIGHT};
pub use mode_indicator::ModeIndicator;
