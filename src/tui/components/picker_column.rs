//! Picker column component - the scrolling list of candidates.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::interaction::ClickRegion;
use crate::tui::theme::*;

/// Width of the column including its border.
const COLUMN_WIDTH: u16 = 24;

/// Format a candidate with its unit, if any.
pub fn format_value(value: i64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", value, unit),
        _ => value.to_string(),
    }
}

/// Area of the column, centered in `area`.
pub fn column_area(area: Rect, window_len: usize) -> Rect {
    let width = COLUMN_WIDTH.min(area.width);
    let height = (window_len as u16).saturating_add(2).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the candidate window and register its rows for clicks and hovers.
pub fn render_picker_column(frame: &mut Frame, area: Rect, app: &mut App) {
    let layout = *app.picker.layout();
    let column = column_area(area, layout.window_len());
    frame.render_widget(Clear, column);

    let inner = Rect::new(
        column.x + 1,
        column.y + 1,
        column.width.saturating_sub(2),
        column.height.saturating_sub(2),
    );
    app.interactions
        .register_column(ClickRegion::new(column.x, column.y, column.width, column.height));

    let rows = app.picker.window_at(app.animator.displayed());
    // Keep the centered row centered when the terminal is too short for the window
    let skip = rows.len().saturating_sub(inner.height as usize) / 2;
    let label_width = inner.width.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = vec![];
    for (i, slot) in rows.iter().skip(skip).take(inner.height as usize).enumerate() {
        let Some(row) = slot else {
            lines.push(Line::raw(""));
            continue;
        };

        let text = format_value(row.value, app.picker.unit());
        let mut style = emphasis_style(row.emphasis);
        if row.hovered {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let is_center = skip + i == layout.half_window as usize;
        let (left, right) = if is_center { ("▸ ", " ◂") } else { ("  ", "  ") };

        lines.push(Line::from(vec![
            Span::styled(left, Style::new().fg(LOGO_MINT)),
            Span::styled(format!("{:^width$}", text, width = label_width), style),
            Span::styled(right, Style::new().fg(LOGO_MINT)),
        ]));

        app.interactions
            .register_row(row.value, ClickRegion::new(inner.x, inner.y + i as u16, inner.width, 1));
    }

    let border_color = if app.picker.is_settling() || app.drag.is_dragging() {
        LOGO_GOLD
    } else {
        LOGO_LIGHT_BLUE
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color));
    if let Some(label) = app.picker.label() {
        block = block
            .title(format!(" {} ", label))
            .title_style(Style::new().fg(TEXT_WHITE).bold());
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, column);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_with_unit() {
        assert_eq!(format_value(70, Some("kg")), "70 kg");
        assert_eq!(format_value(-3, None), "-3");
        assert_eq!(format_value(5, Some("")), "5");
    }

    #[test]
    fn test_column_centered_and_clipped() {
        let area = Rect::new(0, 0, 80, 24);
        let column = column_area(area, 7);
        assert_eq!(column, Rect::new(28, 7, 24, 9));

        let tiny = Rect::new(0, 0, 10, 4);
        let column = column_area(tiny, 7);
        assert_eq!(column.width, 10);
        assert_eq!(column.height, 4);
    }
}
