//! Pure color math: HSV and L*a*b* conversions, contrast evaluation.

pub mod contrast;
pub mod hsv;
pub mod lab;

pub use contrast::{
    contrast_ratio, ensure_text_contrast, find_contrast_color, search_contrast, ContrastSearch,
    LARGE_TEXT_CONTRAST_RATIO, LIGHTNESS_TOLERANCE, MAX_SEARCH_ITERATIONS, TEXT_CONTRAST_RATIO,
};
pub use hsv::{
    color_to_hsv, hsv_percent, hsv_percent_to_color, hsv_to_color, hue, saturation, value,
};
