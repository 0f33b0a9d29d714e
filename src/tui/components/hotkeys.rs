//! Hotkey line component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

fn hint<'a>(key: &'a str, what: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::new().fg(TEXT_WHITE)),
        Span::styled(what, Style::new().fg(TEXT_DIM)),
    ]
}

/// Render the hotkey hints, short or full.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, expanded: bool) {
    let mut spans: Vec<Span> = vec![];
    spans.extend(hint("[↑/↓]", " step · "));
    if expanded {
        spans.extend(hint("[wheel]", " step · "));
        spans.extend(hint("[drag]", " scroll · "));
        spans.extend(hint("[click]", " select · "));
        spans.extend(hint("[Home/End]", " bounds · "));
    }
    spans.extend(hint("[Enter]", " confirm · "));
    spans.extend(hint("[Esc]", " quit · "));
    spans.extend(hint("[?]", if expanded { " less" } else { " more" }));

    let paragraph = Paragraph::new(Line::from(spans).centered());
    frame.render_widget(paragraph, area);
}
