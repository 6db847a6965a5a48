//! View state for the directory.
//!
//! `DirectoryState` is the single owner of everything the view shows. It
//! changes only through [`DirectoryState::apply`]; renderers borrow it.

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::filter::{filter_countries, SearchQuery};
use crate::flags::{BrokenFlagSet, FlagSource};
use crate::model::Country;

/// Load lifecycle of the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded,
    Error,
}

impl ViewState {
    /// Loaded and Error are never left
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::Loading => write!(f, "loading"),
            ViewState::Loaded => write!(f, "loaded"),
            ViewState::Error => write!(f, "error"),
        }
    }
}

/// Everything that can change the directory
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The initial fetch completed
    LoadFinished(Result<Vec<Country>, LoadError>),
    /// Search input changed to this raw text
    SearchChanged(String),
    /// The "Load More" control was activated
    LoadMore,
    /// A country's flag image failed to load
    FlagFailed(String),
}

/// Directory view state
#[derive(Debug, Clone)]
pub struct DirectoryState {
    view_state: ViewState,
    countries: Vec<Country>,
    query: Option<SearchQuery>,
    page_size: usize,
    display_count: usize,
    broken_flags: BrokenFlagSet,
}

impl DirectoryState {
    /// Fresh state in `Loading`. `page_size` must be positive.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            view_state: ViewState::Loading,
            countries: Vec::new(),
            query: None,
            page_size,
            display_count: page_size,
            broken_flags: BrokenFlagSet::new(),
        }
    }

    /// Apply an action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadFinished(result) => self.finish_load(result),
            Action::SearchChanged(input) => self.set_query(SearchQuery::from_input(&input)),
            Action::LoadMore => {
                self.display_count += self.page_size;
                debug!(display_count = self.display_count, "load more");
            }
            Action::FlagFailed(name) => {
                if self.broken_flags.insert(name.clone()) {
                    debug!(country = %name, "flag failed, using placeholder");
                }
            }
        }
    }

    fn finish_load(&mut self, result: Result<Vec<Country>, LoadError>) {
        if self.view_state.is_terminal() {
            warn!(state = %self.view_state, "ignoring late load result");
            return;
        }
        match result {
            Ok(countries) => {
                // An empty payload still counts as loaded
                self.countries = countries;
                self.view_state = ViewState::Loaded;
            }
            Err(err) => {
                warn!(error = %err, "failed to load countries");
                self.view_state = ViewState::Error;
            }
        }
    }

    fn set_query(&mut self, query: Option<SearchQuery>) {
        if query != self.query {
            self.query = query;
            self.display_count = self.page_size;
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// The unfiltered collection
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn broken_flags(&self) -> &BrokenFlagSet {
        &self.broken_flags
    }

    /// Countries matching the current query, in dataset order
    pub fn filtered(&self) -> Vec<&Country> {
        filter_countries(&self.countries, self.query.as_ref())
    }

    /// The first `display_count` filtered countries
    pub fn visible(&self) -> Vec<&Country> {
        let mut filtered = self.filtered();
        filtered.truncate(self.display_count);
        filtered
    }

    /// Whether the "Load More" control is shown
    pub fn has_more(&self) -> bool {
        let total = self.filtered().len();
        total > self.page_size && total > self.display_count
    }

    /// Image source for a rendered country
    pub fn flag_source<'a>(&self, country: &'a Country) -> FlagSource<'a> {
        self.broken_flags.source_for(country)
    }

    /// Hero line. The count is the unfiltered total.
    pub fn hero_message(&self) -> String {
        match self.view_state {
            ViewState::Loading => "Loading...".to_string(),
            ViewState::Error => "Something went wrong.".to_string(),
            ViewState::Loaded => format!("Currently we have {} countries", self.countries.len()),
        }
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
