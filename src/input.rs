use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Focus;
use crate::messages::UiEvent;
use crate::prefs::Accent;

/// Map keyboard input to a UiEvent based on the current input focus.
///
/// While the search field has focus, shortcut letters are plain text:
/// typing "toggle" must not flip the theme. Esc and Enter hand focus back.
pub fn handle_key(key: KeyEvent, focus: Focus) -> Option<UiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match focus {
        Focus::Search => handle_search_key(key),
        Focus::Normal => handle_normal_key(key),
    }
}

fn handle_normal_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(UiEvent::ToggleTheme),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(UiEvent::ToggleLive),
        KeyCode::Char('/') => Some(UiEvent::FocusSearch),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(UiEvent::CycleAccent),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            Some(UiEvent::SelectAccent(Accent::ALL[idx]))
        }
        _ => None,
    }
}

fn handle_search_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(UiEvent::LeaveSearch),
        KeyCode::Backspace => Some(UiEvent::SearchBackspace),
        KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
        _ => None,
    }
}

/// Key labels for the hint bar
pub fn key_hints(focus: Focus) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Normal => vec![
            ("/", "Search"),
            ("T", "Theme"),
            ("L", "Live"),
            ("A", "Accent"),
            ("1-4", "Accent"),
            ("Q", "Quit"),
        ],
        Focus::Search => vec![
            ("Esc", "Done"),
            ("Enter", "Done"),
            ("Bksp", "Delete"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shifted(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
    }

    #[test]
    fn theme_and_live_shortcuts_ignore_case() {
        assert_eq!(
            handle_key(press(KeyCode::Char('t')), Focus::Normal),
            Some(UiEvent::ToggleTheme)
        );
        assert_eq!(
            handle_key(shifted('T'), Focus::Normal),
            Some(UiEvent::ToggleTheme)
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('l')), Focus::Normal),
            Some(UiEvent::ToggleLive)
        );
        assert_eq!(
            handle_key(shifted('L'), Focus::Normal),
            Some(UiEvent::ToggleLive)
        );
    }

    #[test]
    fn slash_moves_focus_to_search() {
        assert_eq!(
            handle_key(press(KeyCode::Char('/')), Focus::Normal),
            Some(UiEvent::FocusSearch)
        );
    }

    #[test]
    fn digits_select_accents() {
        assert_eq!(
            handle_key(press(KeyCode::Char('2')), Focus::Normal),
            Some(UiEvent::SelectAccent(Accent::Emerald))
        );
        assert_eq!(handle_key(press(KeyCode::Char('5')), Focus::Normal), None);
    }

    #[test]
    fn search_focus_captures_shortcut_letters_as_text() {
        assert_eq!(
            handle_key(press(KeyCode::Char('t')), Focus::Search),
            Some(UiEvent::SearchChar('t'))
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('q')), Focus::Search),
            Some(UiEvent::SearchChar('q'))
        );
        assert_eq!(
            handle_key(press(KeyCode::Backspace), Focus::Search),
            Some(UiEvent::SearchBackspace)
        );
    }

    #[test]
    fn esc_leaves_search_instead_of_quitting() {
        assert_eq!(
            handle_key(press(KeyCode::Esc), Focus::Search),
            Some(UiEvent::LeaveSearch)
        );
        assert_eq!(
            handle_key(press(KeyCode::Esc), Focus::Normal),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(key, Focus::Search), Some(UiEvent::Quit));
        assert_eq!(handle_key(key, Focus::Normal), Some(UiEvent::Quit));
    }
}
