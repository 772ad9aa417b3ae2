//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (tabs_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_tabs(frame, tabs_area, app);

    match app.state.current_view {
        View::Profile => forms::draw_profile_form(frame, main_area, &app.state.profile_form),
        View::Password => forms::draw_password_form(frame, main_area, &app.state.password_form),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors are modal and drawn last
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.state.pending_error_count());
    }
}
