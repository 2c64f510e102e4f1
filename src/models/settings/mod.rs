//! Picker preferences a host application persists between runs.

use serde::{Deserialize, Serialize};

use crate::models::color::Color;
use crate::models::color_model::ColorModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Color model the picker opens with, stored by name.
    pub model: ColorModel,
    /// Last confirmed color as a packed `0xAARRGGBB` integer.
    pub color: Color,
    /// Show the confirm/cancel bar; otherwise the preview is clickable.
    pub show_button_bar: bool,
    /// Follow the OS light/dark preference for the host visuals.
    pub follow_system_theme: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            model: ColorModel::default(),
            color: Color::default(),
            show_button_bar: true,
            follow_system_theme: true,
        }
    }
}
