//! Country data model

use serde::{Deserialize, Serialize};

/// A spoken language entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A country as delivered by the dataset.
///
/// `name` is the unique key. Unknown payload fields are ignored; a missing
/// capital or language list decodes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub capital: String,
    pub population: u64,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Country {
    /// Create a country with no flag and no languages
    pub fn new(name: impl Into<String>, capital: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            population,
            flag: String::new(),
            languages: Vec::new(),
        }
    }

    /// Builder-style flag URL
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Builder-style language list
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Language::new).collect();
        self
    }

    /// Language names in dataset order
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.name.as_str())
    }

    /// "Language" or "Languages" depending on how many there are
    pub fn language_label(&self) -> &'static str {
        if self.languages.len() > 1 {
            "Languages"
        } else {
            "Language"
        }
    }

    /// Alt text for the flag image
    pub fn flag_alt(&self) -> String {
        format!("Flag of {}", self.name)
    }
}

/// Format a population count the en-US way: `1234567` → `1,234,567`.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_restcountries_entry() {
        let json = r#"{
            "name": "Finland",
            "capital": "Helsinki",
            "population": 5491817,
            "flag": "https://flagcdn.com/fi.svg",
            "languages": [
                {"iso639_1": "fi", "name": "Finnish", "nativeName": "suomi"},
                {"iso639_1": "sv", "name": "Swedish", "nativeName": "svenska"}
            ],
            "independent": true
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name, "Finland");
        assert_eq!(country.capital, "Helsinki");
        assert_eq!(country.population, 5_491_817);
        assert_eq!(
            country.language_names().collect::<Vec<_>>(),
            vec!["Finnish", "Swedish"]
        );
        assert_eq!(country.language_label(), "Languages");
    }

    #[test]
    fn test_missing_capital_defaults_empty() {
        let json = r#"{"name": "Antarctica", "population": 1000, "flag": "x", "languages": []}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.capital, "");
        assert_eq!(country.language_label(), "Language");
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(38_005_238), "38,005,238");
        assert_eq!(format_population(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn test_flag_alt() {
        let country = Country::new("Chad", "N'Djamena", 16_425_859);
        assert_eq!(country.flag_alt(), "Flag of Chad");
    }
}
