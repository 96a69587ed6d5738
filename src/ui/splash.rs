//! Splash screen rendering with a block-letter banner

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BANNER_TEXT: &str = "CONSULTPRO";
const GLYPH_ROWS: usize = 5;
const TAGLINE: &str = "Let's talk about your business";

/// 5x5 block glyphs for the banner letters
fn glyph(c: char) -> [&'static str; GLYPH_ROWS] {
    match c {
        'C' => [" ████", "█    ", "█    ", "█    ", " ████"],
        'O' => [" ███ ", "█   █", "█   █", "█   █", " ███ "],
        'N' => ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
        'S' => [" ████", "█    ", " ███ ", "    █", "████ "],
        'U' => ["█   █", "█   █", "█   █", "█   █", " ███ "],
        'L' => ["█    ", "█    ", "█    ", "█    ", "█████"],
        'T' => ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
        'P' => ["████ ", "█   █", "████ ", "█    ", "█    "],
        'R' => ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
        _ => ["     "; GLYPH_ROWS],
    }
}

/// Banner rows for `text`, one space between letters
fn banner_lines(text: &str) -> Vec<String> {
    (0..GLYPH_ROWS)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let banner_style = Style::default().fg(Color::Magenta);
    let mut lines: Vec<Line> = banner_lines(BANNER_TEXT)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, banner_style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{TAGLINE:^width$}", width = banner_width()),
        Style::default().fg(Color::Gray),
    )));

    let logo_height = lines.len() as u16;
    let logo_width = banner_width() as u16;

    // Center position shifted by the scroll offset (may go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if lines_off_top > 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint only while the banner is still
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}

fn banner_width() -> usize {
    let letters = BANNER_TEXT.chars().count();
    letters * 5 + letters.saturating_sub(1)
}
