//! Status bar component - committed value, gesture state and feedback counters.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

use super::picker_column::format_value;

/// Render the one-line status below the column.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let picker = &app.picker;

    let mut spans = vec![
        Span::styled("value ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            format_value(picker.committed_value(), picker.unit()),
            Style::new().fg(TEXT_WHITE).bold(),
        ),
    ];

    if picker.is_settling() {
        spans.push(Span::styled("  scrolling → ", Style::new().fg(TEXT_DIM)));
        spans.push(Span::styled(
            format_value(picker.provisional_value(), picker.unit()),
            Style::new().fg(LOGO_GOLD),
        ));
    }

    spans.push(Span::styled(
        format!(
            "  · {} commits · {} ticks · {}",
            app.commit_count(),
            picker.feedback().tick_count(),
            picker.viewport_class().display_name()
        ),
        Style::new().fg(TEXT_DIM),
    ));

    if !picker.feedback().is_audible() {
        spans.push(Span::styled(" · muted", Style::new().fg(LOGO_CORAL)));
    }

    let paragraph = Paragraph::new(Line::from(spans).centered());
    frame.render_widget(paragraph, area);
}
