//! Flag images and the broken-flag fallback

use std::collections::HashSet;

use reqwest::Client;

use crate::error::LoadError;
use crate::model::Country;

/// File name of the bundled placeholder flag
pub const PLACEHOLDER_FLAG: &str = "flag-not-found.svg";

/// The placeholder artwork, compiled in so the fallback never needs network.
///
/// The terminal view cannot draw images and only shows [`PLACEHOLDER_FLAG`];
/// the SVG is exported for front-ends that can render it.
pub const PLACEHOLDER_FLAG_SVG: &str = include_str!("../assets/flag-not-found.svg");

/// Where a card's flag image comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagSource<'a> {
    /// The dataset's flag URL
    Remote(&'a str),
    /// The bundled placeholder
    Placeholder,
}

impl FlagSource<'_> {
    /// Display form: the URL, or the placeholder file name
    pub fn as_str(&self) -> &str {
        match self {
            FlagSource::Remote(url) => url,
            FlagSource::Placeholder => PLACEHOLDER_FLAG,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, FlagSource::Placeholder)
    }
}

/// Names of countries whose flag failed to load. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct BrokenFlagSet {
    names: HashSet<String>,
}

impl BrokenFlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Returns `false` if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Image source for a country given the failures seen so far
    pub fn source_for<'a>(&self, country: &'a Country) -> FlagSource<'a> {
        if self.contains(&country.name) {
            FlagSource::Placeholder
        } else {
            FlagSource::Remote(&country.flag)
        }
    }
}

/// Try to load a flag image. Any transport failure or non-2xx status is an
/// image error; the body itself is not inspected.
pub async fn probe_flag(client: &Client, url: &str) -> Result<(), LoadError> {
    if url.is_empty() {
        return Err(LoadError::Request("empty flag url".to_string()));
    }
    client.get(url).send().await?.error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_switches_to_placeholder() {
        let chile = Country::new("Chile", "Santiago", 19_116_209).with_flag("https://x/cl.svg");
        let mut broken = BrokenFlagSet::new();
        assert_eq!(broken.source_for(&chile), FlagSource::Remote("https://x/cl.svg"));

        assert!(broken.insert("Chile"));
        assert!(!broken.insert("Chile"));
        assert_eq!(broken.len(), 1);
        assert_eq!(broken.source_for(&chile), FlagSource::Placeholder);
        assert_eq!(broken.source_for(&chile).as_str(), PLACEHOLDER_FLAG);
    }

    #[test]
    fn test_placeholder_asset_is_svg() {
        assert!(PLACEHOLDER_FLAG_SVG.contains("<svg"));
    }
}
