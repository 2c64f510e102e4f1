//! Contrast evaluation and the lightness search used to keep text legible.

use super::lab::{color_to_lab, lab_to_color, relative_luminance, Lab};
use crate::models::color::Color;

/// WCAG AA minimum for normal-size text.
pub const TEXT_CONTRAST_RATIO: f64 = 4.5;
/// Minimum used for large text, highlights and accents.
pub const LARGE_TEXT_CONTRAST_RATIO: f64 = 3.0;

pub const MAX_SEARCH_ITERATIONS: u32 = 15;
pub const LIGHTNESS_TOLERANCE: f64 = 1e-5;

/// Outcome of [`search_contrast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastSearch {
    /// The color to use.
    pub color: Color,
    /// Contrast of `color` against the background.
    pub ratio: f64,
    /// Bisection steps performed; 0 when the foreground already passed.
    pub iterations: u32,
    /// Width of the L* bracket when the search stopped.
    pub bracket_width: f64,
    /// Whether `ratio` reaches the requested minimum.
    pub satisfied: bool,
}

/// Contrast ratio between two colors, `1.0..=21.0`.
///
/// A translucent foreground is composited over the background first. A
/// translucent background is composited over white.
pub fn contrast_ratio(foreground: Color, background: Color) -> f64 {
    let background = if background.is_opaque() {
        background
    } else {
        background.composite_over(Color::WHITE)
    };
    let foreground = if foreground.is_opaque() {
        foreground
    } else {
        foreground.composite_over(background)
    };

    let fg = relative_luminance(foreground) + 0.05;
    let bg = relative_luminance(background) + 0.05;
    fg.max(bg) / fg.min(bg)
}

/// Find the version of `foreground` closest in lightness that reaches
/// `min_ratio` against `background`.
///
/// Chroma and hue (a*, b*) stay fixed at the foreground's values while
/// lightness is bisected toward white on dark backgrounds (L* < 50) and
/// toward black otherwise.
pub fn search_contrast(foreground: Color, background: Color, min_ratio: f64) -> ContrastSearch {
    let initial = contrast_ratio(foreground, background);
    if initial >= min_ratio {
        return ContrastSearch {
            color: foreground,
            ratio: initial,
            iterations: 0,
            bracket_width: 0.0,
            satisfied: true,
        };
    }

    let background_lightness = color_to_lab(background).l;
    let Lab { l: fg_lightness, a, b } = color_to_lab(foreground);
    let background_is_dark = background_lightness < 50.0;

    // `high` always passes on a dark background, `low` on a light one.
    let (mut low, mut high) = if background_is_dark {
        (fg_lightness, 100.0)
    } else {
        (0.0, fg_lightness)
    };

    let mut iterations = 0;
    while iterations < MAX_SEARCH_ITERATIONS && high - low > LIGHTNESS_TOLERANCE {
        let l = (low + high) / 2.0;
        let candidate = lab_to_color(Lab { l, a, b });
        let passes = contrast_ratio(candidate, background) > min_ratio;

        match (passes, background_is_dark) {
            (true, true) | (false, false) => high = l,
            (true, false) | (false, true) => low = l,
        }
        iterations += 1;
    }

    let lightness = if background_is_dark { high } else { low };
    let color = lab_to_color(Lab { l: lightness, a, b });
    let ratio = contrast_ratio(color, background);

    log::trace!(
        "contrast search for {} on {}: {} after {} steps (ratio {:.2})",
        foreground,
        background,
        color,
        iterations,
        ratio
    );

    ContrastSearch {
        color,
        ratio,
        iterations,
        bracket_width: high - low,
        satisfied: ratio >= min_ratio,
    }
}

/// `foreground` if it already reaches `min_ratio`, otherwise the
/// lightness-adjusted color found by [`search_contrast`].
pub fn find_contrast_color(foreground: Color, background: Color, min_ratio: f64) -> Color {
    search_contrast(foreground, background, min_ratio).color
}

/// Adjust `foreground` so normal-size text on `background` meets WCAG AA.
pub fn ensure_text_contrast(foreground: Color, background: Color) -> Color {
    find_contrast_color(foreground, background, TEXT_CONTRAST_RATIO)
}
