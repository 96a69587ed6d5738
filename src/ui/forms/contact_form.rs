//! Contact form rendering: progress header, step fields, actions and the thank-you panel

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{ContactForm, FormButton, Step};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Width of the form card
const CARD_WIDTH: u16 = 68;
/// Header rows: title line + gauge
const HEADER_HEIGHT: u16 = 2;

/// Draw the contact form card for the current step
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let step = form.step();

    let body_height = if step.is_success() {
        9
    } else {
        let fields: u16 = step.fields().iter().map(|f| field_height(*f)).sum();
        HEADER_HEIGHT + 1 + fields + BUTTON_HEIGHT
    };
    let card = centered_rect(area, CARD_WIDTH, body_height + 2);

    let block = Block::default()
        .title(Span::styled(
            " ConsultPro · Get in touch ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    if step.is_success() {
        draw_success(frame, inner);
        return;
    }

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Length(1)];
    constraints.extend(
        step.fields()
            .iter()
            .map(|f| Constraint::Length(field_height(*f))),
    );
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    draw_header(frame, chunks[0], step, app.state.progress.value());

    let focused = form.focused_field();
    for (idx, field) in step.fields().iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 2],
            *field,
            form.value(*field),
            form.error(*field),
            focused == Some(*field),
        );
    }

    draw_actions(frame, chunks[step.fields().len() + 2], form);
}

/// Step title, "Step N of 3" and the progress gauge
fn draw_header(frame: &mut Frame, area: Rect, step: Step, progress: u16) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let title = step.title().unwrap_or_default();
    let counter = step
        .number()
        .map(|n| format!("Step {n} of {}", Step::INPUT_STEPS))
        .unwrap_or_default();

    let title_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counter.len() as u16)])
        .split(rows[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        title_row[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(counter, Style::default().fg(Color::Gray))),
        title_row[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .percent(progress.min(100))
        .label(format!("{}%", progress.min(100)));
    frame.render_widget(gauge, rows[1]);
}

/// Back (when available) on the left, Next/Submit on the right
fn draw_actions(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(area);

    let on_row = form.is_actions_row_active();
    let selected = form.selected_button();

    if form.can_go_back() {
        render_action_button(
            frame,
            columns[0],
            "← Back",
            on_row && selected == FormButton::Back,
            Some(Color::Gray),
        );
    }

    let step = form.step();
    let primary = match step {
        Step::Message => format!("{} ✉", step.primary_action()),
        _ => format!("{} →", step.primary_action()),
    };
    render_action_button(
        frame,
        columns[2],
        &primary,
        on_row && selected == FormButton::Primary,
        Some(Color::Magenta),
    );
}

/// Thank-you panel shown after submission
fn draw_success(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "✔",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Thank You!",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "We've received your message and will get back to you shortly.",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center),
        rows[2],
    );

    let button = centered_rect(rows[4], 18, BUTTON_HEIGHT);
    render_action_button(frame, button, Step::Success.primary_action(), true, Some(Color::Magenta));
}
