//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

use dialpick::picker::PickerEvent;

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // === Application ===
    /// Leave keeping the committed value
    Confirm,
    /// Leave without confirming
    Quit,
    /// Toggle the help line
    ToggleHelp,

    // === Picker ===
    /// Forward an input notification to the picker engine
    Picker(PickerEvent),

    // === Pointer ===
    /// Left button pressed
    Press { column: u16, row: u16 },
    /// Pointer moved with the left button held
    DragTo { row: u16 },
    /// Left button released
    Release,
    /// Pointer moved without a button
    Hover { column: u16, row: u16 },

    // === Terminal ===
    /// Terminal resized to this many columns
    Resize { columns: u16 },

    /// No action (event not handled)
    None,
}

impl Action {
    /// Check if this action is a no-op
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
