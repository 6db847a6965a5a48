//! Keybinding definitions

use crossterm::event::{KeyCode, KeyModifiers};

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Focus the search box
    EnterSearchMode,
    /// Leave the search box, keeping the query
    Cancel,
    /// Scroll the card list up
    MoveUp,
    /// Scroll the card list down
    MoveDown,
    /// Show the next page of cards
    LoadMore,
    /// Toggle help
    ToggleHelp,
}

fn is_ctrl_c(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    if is_ctrl_c(code, modifiers) {
        return Some(KeyAction::Quit);
    }
    match code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char('/') => Some(KeyAction::EnterSearchMode),
        KeyCode::Char('?') => Some(KeyAction::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(KeyAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(KeyAction::MoveUp),
        KeyCode::Char('m') | KeyCode::Enter => Some(KeyAction::LoadMore),
        KeyCode::Esc => Some(KeyAction::Cancel),
        _ => None,
    }
}

/// Get the action for a key in search mode.
///
/// Printable characters and Backspace edit the query and are handled by
/// the caller; only control keys map here.
pub fn search_mode_action(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    if is_ctrl_c(code, modifiers) {
        return Some(KeyAction::Quit);
    }
    match code {
        KeyCode::Esc | KeyCode::Enter => Some(KeyAction::Cancel),
        KeyCode::Down => Some(KeyAction::MoveDown),
        KeyCode::Up => Some(KeyAction::MoveUp),
        _ => None,
    }
}
