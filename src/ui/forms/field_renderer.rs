//! Field rendering utilities for forms

use crate::state::{option_label, FieldKind, FieldName};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the message box
const MULTILINE_HEIGHT: u16 = 7;

/// Rows a field needs, including the line reserved for its error
pub fn field_height(field: FieldName) -> u16 {
    let input = if field.kind().is_multiline() {
        MULTILINE_HEIGHT
    } else {
        3
    };
    input + 1
}

/// Text shown inside the input box
fn display_value(field: FieldName, value: &str, is_active: bool) -> String {
    match field.kind() {
        FieldKind::Select(options) => {
            let label = option_label(options, value);
            if is_active {
                format!("◀ {label} ▶")
            } else {
                label
            }
        }
        FieldKind::Text | FieldKind::Multiline => value.to_string(),
    }
}

/// Draw a labelled input with its validation message underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Magenta),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_str = display_value(field, value, is_active);
    // Selects show their own arrows instead of a cursor
    let cursor = if is_active && !field.kind().is_select() {
        "▌"
    } else {
        ""
    };

    let content = if field.kind().is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Magenta)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, Style::default().fg(Color::Magenta)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(FieldName::FirstName), 4);
        assert_eq!(field_height(FieldName::Industry), 4);
        assert_eq!(field_height(FieldName::Message), MULTILINE_HEIGHT + 1);
    }

    #[test]
    fn test_select_shows_label() {
        assert_eq!(
            display_value(FieldName::Industry, "", false),
            "Select Industry"
        );
        assert_eq!(
            display_value(FieldName::Employees, "51-200", true),
            "◀ 51-200 ▶"
        );
    }

    #[test]
    fn test_text_shows_raw_value() {
        assert_eq!(display_value(FieldName::Email, "ann@x.com", true), "ann@x.com");
    }
}
