//! Logo component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

/// Render the colorful "dialpick" logo centered in the area.
pub fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let spans: Vec<Span> = "dialpick"
        .chars()
        .enumerate()
        .map(|(i, c)| Span::styled(c.to_string(), Style::new().fg(colors[i % colors.len()]).bold()))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans).centered());
    frame.render_widget(paragraph, area);
}
