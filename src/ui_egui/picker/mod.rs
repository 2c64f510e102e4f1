//! egui host for the color picker.
//!
//! [`PickerDisplay`] is the retained state egui draws from every frame; the
//! session writes into it through [`PickerView`]. [`render_color_picker`]
//! draws it and forwards user edits back to the session.

mod render;

pub use render::{render_color_picker, PickerAction};

use egui::Color32;

use crate::models::color::Color;
use crate::models::color_model::ColorModel;
use crate::services::picker::PickerView;

const HEX_WIDTH_RGB: f32 = 72.0;
const HEX_WIDTH_ARGB: f32 = 92.0;

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.red(), color.green(), color.blue(), color.alpha())
}

/// One slider + numeric field row.
#[derive(Debug, Clone)]
pub struct ChannelRow {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub progress: i32,
    pub text: String,
    pub tint: Color32,
    pub highlight: Color32,
}

#[derive(Debug, Clone)]
pub struct PickerDisplay {
    pub rows: Vec<ChannelRow>,
    pub hex_text: String,
    pub hex_width: f32,
    pub hex_text_color: Color32,
    pub hex_highlight: Color32,
    pub preview: Color32,
    pub button_text: Color32,
    pub button_bar_visible: bool,
    pub preview_clickable: bool,
}

impl PickerDisplay {
    /// Empty rows for each of `model`'s channels.
    pub fn for_model(model: ColorModel) -> Self {
        let rows = model
            .channels()
            .iter()
            .map(|kind| ChannelRow {
                label: kind.name(),
                min: kind.min(),
                max: kind.max(),
                progress: kind.min(),
                text: kind.min().to_string(),
                tint: Color32::GRAY,
                highlight: Color32::GRAY,
            })
            .collect();

        let hex_width = if model == ColorModel::Argb {
            HEX_WIDTH_ARGB
        } else {
            HEX_WIDTH_RGB
        };

        Self {
            rows,
            hex_text: "#".to_string(),
            hex_width,
            hex_text_color: Color32::BLACK,
            hex_highlight: Color32::DARK_GRAY,
            preview: Color32::GRAY,
            button_text: Color32::BLACK,
            button_bar_visible: false,
            preview_clickable: false,
        }
    }
}

impl PickerView for PickerDisplay {
    fn show_channel(&mut self, index: usize, progress: i32, text: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.progress = progress;
            row.text = text.to_string();
        }
    }

    fn tint_channel(&mut self, index: usize, tint: Color, highlight: Color) {
        if let Some(row) = self.rows.get_mut(index) {
            row.tint = to_color32(tint);
            row.highlight = to_color32(highlight);
        }
    }

    fn show_hex(&mut self, text: &str) {
        self.hex_text = text.to_string();
    }

    fn style_hex(&mut self, text_color: Color, highlight: Color) {
        self.hex_text_color = to_color32(text_color);
        self.hex_highlight = to_color32(highlight);
    }

    fn show_preview(&mut self, swatch: Color) {
        self.preview = to_color32(swatch);
    }

    fn style_buttons(&mut self, text_color: Color) {
        self.button_text = to_color32(text_color);
    }

    fn set_button_bar_visible(&mut self, visible: bool) {
        self.button_bar_visible = visible;
    }

    fn set_preview_clickable(&mut self, clickable: bool) {
        self.preview_clickable = clickable;
    }
}
