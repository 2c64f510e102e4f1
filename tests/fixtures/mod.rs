// Test fixtures - reusable colors and sessions
// Provides consistent test data across integration tests

use chroma_picker::models::color::Color;
use chroma_picker::models::color_model::ColorModel;
use chroma_picker::services::picker::ColorPicker;
use chroma_picker::ui_egui::picker::PickerDisplay;

/// Sample colors for testing
pub mod colors {
    use super::*;

    pub fn orange() -> Color {
        Color::rgb(0xFF, 0x80, 0x00)
    }

    pub fn green() -> Color {
        Color::rgb(0x00, 0xFF, 0x00)
    }

    /// Hue 355°, beyond what the HSV hue slider can show
    pub fn pink() -> Color {
        Color::rgb(255, 0, 21)
    }
}

/// A session rendered into the egui display state
pub fn picker(color: Color, model: ColorModel) -> ColorPicker<PickerDisplay> {
    ColorPicker::new(color, model, PickerDisplay::for_model(model))
        .expect("fixture color must fit the model")
}

/// Channel texts as currently displayed
pub fn row_texts(picker: &ColorPicker<PickerDisplay>) -> Vec<String> {
    picker.view().rows.iter().map(|row| row.text.clone()).collect()
}

/// Slider positions as currently displayed
pub fn row_progress(picker: &ColorPicker<PickerDisplay>) -> Vec<i32> {
    picker.view().rows.iter().map(|row| row.progress).collect()
}
