//! Mouse event handling.
//!
//! Wheel notches are dispatched through the interaction registry, which is
//! populated by UI components during each render. Presses, drags and releases
//! are passed on raw; the App decides whether a release was a click.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use dialpick::picker::{PickerEvent, Step};

use crate::tui::interaction::InteractionRegistry;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(interactions: &InteractionRegistry, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let action = interactions.handle_scroll_up(x, y);
            if action.is_none() {
                // The picker is the only scrollable thing on screen
                Action::Picker(PickerEvent::Wheel(Step::Decrement))
            } else {
                action
            }
        }
        MouseEventKind::ScrollDown => {
            let action = interactions.handle_scroll_down(x, y);
            if action.is_none() {
                Action::Picker(PickerEvent::Wheel(Step::Increment))
            } else {
                action
            }
        }
        MouseEventKind::Down(MouseButton::Left) => Action::Press { column: x, row: y },
        MouseEventKind::Drag(MouseButton::Left) => Action::DragTo { row: y },
        MouseEventKind::Up(MouseButton::Left) => Action::Release,
        MouseEventKind::Moved => Action::Hover { column: x, row: y },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wheel_defaults_to_picker_steps() {
        let registry = InteractionRegistry::new();
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::ScrollDown, 0, 0)),
            Action::Picker(PickerEvent::Wheel(Step::Increment))
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::ScrollUp, 0, 0)),
            Action::Picker(PickerEvent::Wheel(Step::Decrement))
        );
    }

    #[test]
    fn test_left_button_lifecycle() {
        let registry = InteractionRegistry::new();
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Down(MouseButton::Left), 3, 7)),
            Action::Press { column: 3, row: 7 }
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Drag(MouseButton::Left), 3, 9)),
            Action::DragTo { row: 9 }
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Up(MouseButton::Left), 3, 9)),
            Action::Release
        );
        assert!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Down(MouseButton::Right), 3, 9))
                .is_none()
        );
    }
}
