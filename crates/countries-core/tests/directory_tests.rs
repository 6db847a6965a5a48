//! Directory state scenarios
//!
//! Drives `DirectoryState` through the user-facing flows: loading, paging,
//! searching and flag failures.

use countries_core::{Action, Country, DirectoryState, FlagSource, LoadError, ViewState};
use rstest::rstest;

fn sample(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            Country::new(format!("Land {i}"), format!("Town {i}"), 1_000 * i as u64)
                .with_flag(format!("https://flags.example/{i}.svg"))
                .with_languages(["English"])
        })
        .collect()
}

fn loaded_with(countries: Vec<Country>) -> DirectoryState {
    let mut state = DirectoryState::new(8);
    state.apply(Action::LoadFinished(Ok(countries)));
    state
}

#[test]
fn test_empty_fetch_is_loaded() {
    let state = loaded_with(Vec::new());
    assert_eq!(state.view_state(), ViewState::Loaded);
    assert_eq!(state.hero_message(), "Currently we have 0 countries");
    assert!(state.visible().is_empty());
    assert!(!state.has_more());
}

#[rstest]
#[case(LoadError::Request("connection refused".to_string()))]
#[case(LoadError::Status(503))]
#[case(LoadError::Decode("expected value at line 1".to_string()))]
fn test_failed_fetch_is_error(#[case] err: LoadError) {
    let mut state = DirectoryState::new(8);
    state.apply(Action::LoadFinished(Err(err)));
    assert_eq!(state.view_state(), ViewState::Error);
    assert_eq!(state.hero_message(), "Something went wrong.");
    assert!(state.countries().is_empty());
}

#[test]
fn test_ten_countries_paginate() {
    let mut state = loaded_with(sample(10));
    assert_eq!(state.visible().len(), 8);
    assert!(state.has_more());

    state.apply(Action::LoadMore);
    assert_eq!(state.visible().len(), 10);
    assert!(!state.has_more());
}

#[test]
fn test_query_change_resets_display_count() {
    let mut state = loaded_with(sample(30));
    state.apply(Action::SearchChanged("x".to_string()));
    state.apply(Action::LoadMore);
    assert_eq!(state.display_count(), 16);

    state.apply(Action::SearchChanged("y".to_string()));
    assert_eq!(state.display_count(), 8);
}

#[rstest]
#[case("", 30, true)]
#[case("land 1", 11, true)] // 1, 10..19
#[case("land 2", 11, true)] // 2, 20..29
#[case("land 3", 1, false)]
#[case("english", 30, true)]
#[case("french", 0, false)]
fn test_search_counts(#[case] input: &str, #[case] expected: usize, #[case] more: bool) {
    let mut state = loaded_with(sample(30));
    state.apply(Action::SearchChanged(input.to_string()));
    assert_eq!(state.filtered().len(), expected);
    assert_eq!(state.visible().len(), expected.min(8));
    assert_eq!(state.has_more(), more);
}

#[test]
fn test_single_broken_flag() {
    let mut state = loaded_with(sample(5));
    state.apply(Action::FlagFailed("Land 2".to_string()));

    for country in state.visible() {
        let source = state.flag_source(country);
        if country.name == "Land 2" {
            assert_eq!(source, FlagSource::Placeholder);
        } else {
            assert_eq!(source, FlagSource::Remote(country.flag.as_str()));
        }
    }
}

#[test]
fn test_broken_flag_applies_to_duplicate_names() {
    let twins = vec![
        Country::new("Congo", "Brazzaville", 5_518_092).with_flag("https://flags.example/cg.svg"),
        Country::new("Congo", "Kinshasa", 89_561_404).with_flag("https://flags.example/cd.svg"),
    ];
    let mut state = loaded_with(twins);
    state.apply(Action::FlagFailed("Congo".to_string()));
    assert!(state
        .visible()
        .iter()
        .all(|c| state.flag_source(c).is_placeholder()));
}

#[test]
fn test_broken_flags_survive_search() {
    let mut state = loaded_with(sample(10));
    state.apply(Action::FlagFailed("Land 9".to_string()));
    state.apply(Action::SearchChanged("land 9".to_string()));
    state.apply(Action::SearchChanged(String::new()));
    assert!(state.broken_flags().contains("Land 9"));
}
