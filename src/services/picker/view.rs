//! The surfaces a host renders for the picker.
//!
//! The session pushes every programmatic update through this trait. None of
//! these calls may be reported back to the session as user edits.

use crate::models::color::Color;

#[cfg_attr(test, mockall::automock)]
pub trait PickerView {
    /// Set a channel row's slider position and numeric text.
    fn show_channel(&mut self, index: usize, progress: i32, text: &str);

    /// Tint a channel row's slider and set its text highlight.
    fn tint_channel(&mut self, index: usize, tint: Color, highlight: Color);

    /// Replace the hex field's text.
    fn show_hex(&mut self, text: &str);

    /// Text and highlight/accent colors of the hex field.
    fn style_hex(&mut self, text_color: Color, highlight: Color);

    /// Paint the preview surface.
    fn show_preview(&mut self, swatch: Color);

    /// Text color of the confirm/cancel buttons.
    fn style_buttons(&mut self, text_color: Color);

    fn set_button_bar_visible(&mut self, visible: bool);

    fn set_preview_clickable(&mut self, clickable: bool);
}
