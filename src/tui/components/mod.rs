//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `logo` - Colored title line
//! - `picker_column` - The candidate window with emphasis and row hit regions
//! - `status_bar` - Committed value, in-flight gesture and counters
//! - `hotkeys` - Key hints
//! - `separators` - Horizontal line separator

mod hotkeys;
mod logo;
mod picker_column;
mod separators;
mod status_bar;

// Re-export all render functions for use in ui.rs
pub use hotkeys::render_hotkeys;
pub use logo::render_logo;
pub use picker_column::render_picker_column;
pub use separators::render_horizontal_separator;
pub use status_bar::render_status_bar;
