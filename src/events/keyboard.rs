//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use dialpick::picker::{PickerEvent, Step, ValueDomain};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(domain: &ValueDomain, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char('?') => Action::ToggleHelp,

        // Arrow keys follow the column: down moves toward larger values
        KeyCode::Char('j') | KeyCode::Down => Action::Picker(PickerEvent::Key(Step::Increment)),
        KeyCode::Char('k') | KeyCode::Up => Action::Picker(PickerEvent::Key(Step::Decrement)),

        KeyCode::Home | KeyCode::Char('g') => Action::Picker(PickerEvent::Select(domain.min())),
        KeyCode::End | KeyCode::Char('G') => Action::Picker(PickerEvent::Select(domain.max())),

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_step() {
        let domain = ValueDomain::new(40, 150);
        assert_eq!(
            handle_key_event(&domain, key(KeyCode::Down)),
            Action::Picker(PickerEvent::Key(Step::Increment))
        );
        assert_eq!(
            handle_key_event(&domain, key(KeyCode::Char('k'))),
            Action::Picker(PickerEvent::Key(Step::Decrement))
        );
    }

    #[test]
    fn test_home_end_select_bounds() {
        let domain = ValueDomain::new(40, 150);
        assert_eq!(
            handle_key_event(&domain, key(KeyCode::Home)),
            Action::Picker(PickerEvent::Select(40))
        );
        assert_eq!(
            handle_key_event(&domain, key(KeyCode::End)),
            Action::Picker(PickerEvent::Select(150))
        );
    }

    #[test]
    fn test_exit_keys() {
        let domain = ValueDomain::new(0, 10);
        assert_eq!(handle_key_event(&domain, key(KeyCode::Enter)), Action::Confirm);
        assert_eq!(handle_key_event(&domain, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(
                &domain,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Action::Quit
        );
        assert!(handle_key_event(&domain, key(KeyCode::Char('x'))).is_none());
    }
}
