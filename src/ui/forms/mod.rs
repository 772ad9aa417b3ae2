//! Form rendering module
//!
//! - `field_renderer`: input box + inline error for one field
//! - `form_page`: card layout shared by both forms

mod field_renderer;
mod form_page;

use crate::state::{PasswordUpdateForm, ProfileUpdateForm, PASSWORD_FORM_TITLE, PROFILE_FORM_TITLE};
use form_page::draw_form_page;
use ratatui::{layout::Rect, Frame};

/// Draw the Update Password form
pub fn draw_password_form(frame: &mut Frame, area: Rect, form: &PasswordUpdateForm) {
    draw_form_page(
        frame,
        area,
        PASSWORD_FORM_TITLE,
        &form.controller,
        form.button_label(),
    );
}

/// Draw the Update Profile form
pub fn draw_profile_form(frame: &mut Frame, area: Rect, form: &ProfileUpdateForm) {
    draw_form_page(
        frame,
        area,
        PROFILE_FORM_TITLE,
        &form.controller,
        form.button_label(),
    );
}
