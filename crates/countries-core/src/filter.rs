//! Substring search over the country list.
//!
//! A country matches when its haystack
//!
//! ```text
//! {name} {capital} {language names joined by spaces}
//! ```
//!
//! lowercased, contains the query. No tokenization, no diacritic folding.

use crate::model::Country;

/// A non-empty, lowercased search query.
///
/// Absence of a query is expressed as `Option::<SearchQuery>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Interpret raw search input. Empty input means "no filter".
    pub fn from_input(input: &str) -> Option<Self> {
        if input.is_empty() {
            None
        } else {
            Some(Self(input.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the country's haystack contains this query
    pub fn matches(&self, country: &Country) -> bool {
        haystack(country).contains(&self.0)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercased search text for a country
pub fn haystack(country: &Country) -> String {
    let languages = country.language_names().collect::<Vec<_>>().join(" ");
    format!("{} {} {}", country.name, country.capital, languages).to_lowercase()
}

/// Filter `countries` by `query`, preserving order.
///
/// With no query every country is returned.
pub fn filter_countries<'a>(
    countries: &'a [Country],
    query: Option<&SearchQuery>,
) -> Vec<&'a Country> {
    match query {
        None => countries.iter().collect(),
        Some(q) => countries.iter().filter(|c| q.matches(c)).collect(),
    }
}
