//! TUI views

pub(crate) mod country_list;
pub(crate) mod hero;
pub(crate) mod search;

pub use country_list::CountryListView;
pub use hero::HeroView;
pub use search::SearchView;

use countries_core::DirectoryState;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Trait for views that draw straight from directory state
pub trait View {
    fn render(&self, frame: &mut Frame, area: Rect, state: &DirectoryState);
}
