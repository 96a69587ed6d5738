//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash_state)) = (app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let main_area = layout::create_layout(area);
    forms::draw_contact_form(frame, main_area, app);
    layout::draw_status_bar(frame, app);

    // Modal errors on top of everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
