//! Key mapping

use crossterm::event::{KeyCode, KeyModifiers};

/// Actions available while navigating (not editing text)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,

    // Selection
    Select,
    Back,

    // Tabs and focus
    NextTab,
    EditUrl,

    // Quiz
    TakeQuiz,
    Submit,

    // History
    Refresh,

    Quit,
}

/// Vim-style key mapping (basic, without modifiers)
pub fn vim_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::NextTab),
        KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::EditUrl),
        KeyCode::Char('t') => Some(Action::TakeQuiz),
        KeyCode::Char('s') => Some(Action::Submit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') | KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('u') | KeyCode::Char('b') => Some(Action::PageUp),
            _ => None,
        }
    } else {
        vim_key_to_action(key)
    }
}

/// Actions available while editing the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
    Paste,
    Preview,
    Generate,
    Leave,
    NextTab,
    Quit,
}

/// Key mapping for the URL line editor
pub fn edit_key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<EditAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('c') => Some(EditAction::Quit),
            KeyCode::Char('p') => Some(EditAction::Preview),
            KeyCode::Char('v') => Some(EditAction::Paste),
            KeyCode::Char('u') => Some(EditAction::Clear),
            KeyCode::Char('a') => Some(EditAction::Home),
            KeyCode::Char('e') => Some(EditAction::End),
            _ => None,
        };
    }
    match key {
        KeyCode::Char(c) => Some(EditAction::Insert(c)),
        KeyCode::Backspace => Some(EditAction::Backspace),
        KeyCode::Delete => Some(EditAction::Delete),
        KeyCode::Left => Some(EditAction::Left),
        KeyCode::Right => Some(EditAction::Right),
        KeyCode::Home => Some(EditAction::Home),
        KeyCode::End => Some(EditAction::End),
        KeyCode::Enter => Some(EditAction::Generate),
        KeyCode::Esc | KeyCode::Down => Some(EditAction::Leave),
        KeyCode::Tab | KeyCode::BackTab => Some(EditAction::NextTab),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(vim_key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(vim_key_to_action(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(vim_key_to_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn enter_and_space_select() {
        assert_eq!(vim_key_to_action(KeyCode::Enter), Some(Action::Select));
        assert_eq!(vim_key_to_action(KeyCode::Char(' ')), Some(Action::Select));
    }

    #[test]
    fn quiz_keys() {
        assert_eq!(vim_key_to_action(KeyCode::Char('t')), Some(Action::TakeQuiz));
        assert_eq!(vim_key_to_action(KeyCode::Char('s')), Some(Action::Submit));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            edit_key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(EditAction::Quit)
        );
    }

    #[test]
    fn editor_inserts_plain_characters() {
        assert_eq!(
            edit_key_to_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(EditAction::Insert('q'))
        );
        assert_eq!(
            edit_key_to_action(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            Some(EditAction::Insert('Q'))
        );
    }

    #[test]
    fn editor_shortcuts() {
        assert_eq!(edit_key_to_action(KeyCode::Enter, KeyModifiers::NONE), Some(EditAction::Generate));
        assert_eq!(
            edit_key_to_action(KeyCode::Char('p'), KeyModifiers::CONTROL),
            Some(EditAction::Preview)
        );
        assert_eq!(edit_key_to_action(KeyCode::Esc, KeyModifiers::NONE), Some(EditAction::Leave));
    }
}
