//! Layout helpers and the status bar

use crate::app::App;
use crate::state::{FieldKind, Step, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, returning the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(" ● ", Style::default().fg(Color::Magenta))];
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has focus
fn get_view_hints(app: &App) -> String {
    if app.state.current_view == View::Splash {
        return "Press any key to skip".to_string();
    }

    let form = &app.state.form;
    if form.step() == Step::Success {
        return "Enter:start over  q:quit".to_string();
    }

    let back = if form.can_go_back() { "  Esc:back" } else { "" };
    match form.focused_field().map(|f| f.kind()) {
        Some(FieldKind::Select(_)) => format!("←/→:choose  Tab:next  ^S:continue{back}"),
        Some(FieldKind::Multiline) => format!("Enter:newline  Tab:next  ^S:submit{back}"),
        Some(FieldKind::Text) => {
            let enter = if form.is_last_field_focused() {
                "continue"
            } else {
                "next"
            };
            format!("Tab:next  Enter:{enter}  ^S:continue{back}")
        }
        None => format!("←/→:button  Enter:press  Tab:fields{back}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, Form};
    use crate::submit::MockSubmitter;

    fn app() -> App {
        App::with_submitter(Box::new(MockSubmitter::new()), false)
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 30, 10);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_create_layout_reserves_status_line() {
        let content = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut app = app();
        assert!(get_view_hints(&app).starts_with("Tab:next"));
        assert!(!get_view_hints(&app).contains("Esc:back"));

        app.state.form.set_focus(3);
        assert!(get_view_hints(&app).contains("Enter:press"));
    }

    #[test]
    fn test_enter_hint_matches_enter_behavior() {
        let mut app = app();
        assert!(get_view_hints(&app).contains("Enter:next"));

        app.state.form.focus_field(FieldName::Email);
        let hints = get_view_hints(&app);
        assert!(hints.contains("Enter:continue"), "{hints}");
        assert!(!hints.contains("Enter:next"));
    }

    #[test]
    fn test_hints_on_company_select() {
        let mut app = app();
        app.state.form.set_field(FieldName::FirstName, "Ann");
        app.state.form.set_field(FieldName::LastName, "Lee");
        app.state.form.set_field(FieldName::Email, "ann@x.com");
        app.state.form.advance();
        app.state.form.focus_field(FieldName::Industry);
        let hints = get_view_hints(&app);
        assert!(hints.contains("choose"));
        assert!(hints.contains("Esc:back"));
    }
}
