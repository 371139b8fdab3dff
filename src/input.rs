//! Input module - maps terminal keys to screen actions
//!
//! Discrete presses only; counting objects move one at a time, so there is
//! no held-key auto-repeat handling here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::ScreenAction;

/// Map a key press to a screen action
pub fn map_key(code: KeyCode) -> Option<ScreenAction> {
    match code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(ScreenAction::Increment),
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') => Some(ScreenAction::Decrement),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => Some(ScreenAction::ToggleFocus),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(ScreenAction::ToggleGrouping),
        KeyCode::Char(c @ '0'..='9') => Some(ScreenAction::Digit(c as u8 - b'0')),
        KeyCode::Enter => Some(ScreenAction::SubmitAnswer),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(ScreenAction::NewChallenge),
        KeyCode::F(n @ 1..=4) => Some(ScreenAction::SelectLevel(n as u8 - 1)),
        KeyCode::Backspace => Some(ScreenAction::Back),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ScreenAction::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ScreenAction::Quit),
        _ => None,
    }
}

/// Ctrl-C always quits, regardless of the key map
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    #[test]
    fn test_map_key_basic_actions() {
        assert_eq!(map_key(KeyCode::Up), Some(ScreenAction::Increment));
        assert_eq!(map_key(KeyCode::Char('+')), Some(ScreenAction::Increment));
        assert_eq!(map_key(KeyCode::Down), Some(ScreenAction::Decrement));
        assert_eq!(map_key(KeyCode::Tab), Some(ScreenAction::ToggleFocus));
        assert_eq!(map_key(KeyCode::Char('g')), Some(ScreenAction::ToggleGrouping));
        assert_eq!(map_key(KeyCode::Enter), Some(ScreenAction::SubmitAnswer));
        assert_eq!(map_key(KeyCode::Char('n')), Some(ScreenAction::NewChallenge));
        assert_eq!(map_key(KeyCode::Char('r')), Some(ScreenAction::Reset));
        assert_eq!(map_key(KeyCode::Char('q')), Some(ScreenAction::Quit));
        assert_eq!(map_key(KeyCode::Backspace), Some(ScreenAction::Back));
        assert_eq!(map_key(KeyCode::Home), None);
    }

    #[test]
    fn test_map_key_digits() {
        assert_eq!(map_key(KeyCode::Char('0')), Some(ScreenAction::Digit(0)));
        assert_eq!(map_key(KeyCode::Char('7')), Some(ScreenAction::Digit(7)));
    }

    #[test]
    fn test_map_key_level_selection() {
        assert_eq!(map_key(KeyCode::F(1)), Some(ScreenAction::SelectLevel(0)));
        assert_eq!(map_key(KeyCode::F(4)), Some(ScreenAction::SelectLevel(3)));
        assert_eq!(map_key(KeyCode::F(5)), None);
    }

    #[test]
    fn test_should_quit_requires_control() {
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert!(should_quit(ctrl_c));

        let plain_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert!(!should_quit(plain_c));
    }
}
