//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pass::{CharacterClass, LENGTH_PRESETS, LengthAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Backspace,
    ClearLength,
    Length(LengthAction),
    Toggle(CharacterClass),
    Generate,
    Copy,
    Reset,
    Quit,
}

/// Map a key press to an action on the main screen.
pub fn action(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => Action::ClearLength,
        _ if ctrl => return None,
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Digit(c),
        KeyCode::Char('+') | KeyCode::Up => Action::Length(LengthAction::Add),
        KeyCode::Char('-') | KeyCode::Down => Action::Length(LengthAction::Subtract),
        KeyCode::F(n @ 1..=5) => Action::Length(LengthAction::Preset(LENGTH_PRESETS[n as usize - 1])),
        KeyCode::Char(c) => {
            match CharacterClass::ALL.into_iter().find(|class| class.hotkey() == c) {
                Some(class) => Action::Toggle(class),
                None => match c {
                    'c' => Action::Copy,
                    'r' => Action::Reset,
                    'q' => Action::Quit,
                    _ => return None,
                },
            }
        }
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::ClearLength,
        KeyCode::Enter => Action::Generate,
        KeyCode::Esc => Action::Quit,
        _ => return None,
    };

    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn digits_edit_length() {
        assert_eq!(action(key(KeyCode::Char('7'))), Some(Action::Digit('7')));
        assert_eq!(action(key(KeyCode::Backspace)), Some(Action::Backspace));
        assert_eq!(action(key(KeyCode::Delete)), Some(Action::ClearLength));
        assert_eq!(action(ctrl('u')), Some(Action::ClearLength));
    }

    #[test]
    fn length_buttons() {
        assert_eq!(
            action(key(KeyCode::Up)),
            Some(Action::Length(LengthAction::Add))
        );
        assert_eq!(
            action(key(KeyCode::Char('-'))),
            Some(Action::Length(LengthAction::Subtract))
        );
        assert_eq!(
            action(key(KeyCode::F(1))),
            Some(Action::Length(LengthAction::Preset(5)))
        );
        assert_eq!(
            action(key(KeyCode::F(5))),
            Some(Action::Length(LengthAction::Preset(25)))
        );
        assert_eq!(action(key(KeyCode::F(6))), None);
    }

    #[test]
    fn class_toggles() {
        assert_eq!(
            action(key(KeyCode::Char('l'))),
            Some(Action::Toggle(CharacterClass::Letters))
        );
        assert_eq!(
            action(key(KeyCode::Char('n'))),
            Some(Action::Toggle(CharacterClass::Numbers))
        );
        assert_eq!(
            action(key(KeyCode::Char('s'))),
            Some(Action::Toggle(CharacterClass::Symbols))
        );
    }

    #[test]
    fn commands_and_quit() {
        assert_eq!(action(key(KeyCode::Enter)), Some(Action::Generate));
        assert_eq!(action(key(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(action(key(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(action(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action(ctrl('c')), Some(Action::Quit));
        assert_eq!(action(ctrl('l')), None);
        assert_eq!(action(key(KeyCode::Char('z'))), None);
    }
}
