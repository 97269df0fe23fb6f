//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::Backend;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Card focus
    FocusNext,
    Focus(Backend),

    // Buttons
    PressFocused,
    Press(Backend),

    // Health probes for both backends
    CheckHealth,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::FocusNext),
        KeyCode::Left => Some(UiEvent::Focus(Backend::SpringBoot)),
        KeyCode::Right => Some(UiEvent::Focus(Backend::FastApi)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::PressFocused),
        KeyCode::Char('1') => Some(UiEvent::Press(Backend::SpringBoot)),
        KeyCode::Char('2') => Some(UiEvent::Press(Backend::FastApi)),
        KeyCode::Char('h') => Some(UiEvent::CheckHealth),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_press_buttons() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('1')), false),
            Some(UiEvent::Press(Backend::SpringBoot))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('2')), false),
            Some(UiEvent::Press(Backend::FastApi))
        );
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('1')), true),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_ctrl_c_quits_even_with_help_open() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_only_documented_keys_quit() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), false), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }
}
