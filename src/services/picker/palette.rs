//! Colors derived from the current color for the preview and its text.

use crate::models::color::Color;
use crate::utils::color_math::{
    contrast_ratio, search_contrast, LARGE_TEXT_CONTRAST_RATIO, TEXT_CONTRAST_RATIO,
};

/// Opaque surface translucent colors are previewed against.
pub const PREVIEW_BACKDROP: Color = Color::WHITE;

/// Everything the host needs to paint around the current color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerPalette {
    /// Current color composited over the backdrop.
    pub swatch: Color,
    /// Hex digits, legible on the swatch at the text threshold.
    pub hex_text: Color,
    /// Hex selection highlight and accent tint.
    pub hex_highlight: Color,
    /// Button-bar labels, legible against the swatch.
    pub button_text: Color,
}

impl PickerPalette {
    pub fn for_color(color: Color) -> Self {
        Self::with_backdrop(color, PREVIEW_BACKDROP)
    }

    pub fn with_backdrop(color: Color, backdrop: Color) -> Self {
        let swatch = if color.is_opaque() {
            color
        } else {
            color.composite_over(backdrop)
        };

        let hex_text = legible_on(swatch, TEXT_CONTRAST_RATIO);
        Self {
            swatch,
            hex_text,
            hex_highlight: legible_on(swatch, LARGE_TEXT_CONTRAST_RATIO),
            button_text: hex_text,
        }
    }
}

/// A shade of `swatch` that reaches `min_ratio` against it. When no
/// lightness of the swatch's hue gets there, black or white, whichever
/// contrasts more.
fn legible_on(swatch: Color, min_ratio: f64) -> Color {
    let search = search_contrast(swatch, swatch, min_ratio);
    if search.satisfied {
        return search.color;
    }

    let fallback = if contrast_ratio(Color::BLACK, swatch) >= contrast_ratio(Color::WHITE, swatch) {
        Color::BLACK
    } else {
        Color::WHITE
    };
    log::debug!(
        "no shade of {} reaches {:.1} (best {:.2}), using {}",
        swatch,
        min_ratio,
        search.ratio,
        fallback
    );
    fallback
}
