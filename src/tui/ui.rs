use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;

use super::components::{
    render_horizontal_separator, render_hotkeys, render_logo, render_picker_column,
    render_status_bar,
};

/// Render one frame, rebuilding the interaction registry as a side effect.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: logo, separator, picker, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Logo
        Constraint::Length(1), // Separator
        Constraint::Min(3),    // Picker column
        Constraint::Length(1), // Status
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_horizontal_separator(frame, main_layout[1]);
    render_picker_column(frame, main_layout[2], app);
    render_status_bar(frame, main_layout[3], app);
    render_hotkeys(frame, main_layout[4], app.show_help);
}
