// Property-based tests for color models, channel sync and contrast search
// Exercises the invariants with random colors and inputs

use chroma_picker::models::channel::{Channel, ChannelKind};
use chroma_picker::models::color::Color;
use chroma_picker::models::color_model::ColorModel;
use chroma_picker::services::picker::{
    filter_hex_input, format_hex, ChannelSync, PickerPalette, TextSelection,
};
use chroma_picker::utils::color_math::{
    contrast_ratio, search_contrast, LIGHTNESS_TOLERANCE, MAX_SEARCH_ITERATIONS,
    TEXT_CONTRAST_RATIO,
};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    any::<u32>().prop_map(Color::from_argb_u32)
}

fn any_kind() -> impl Strategy<Value = ChannelKind> {
    prop_oneof![
        Just(ChannelKind::Alpha),
        Just(ChannelKind::Red),
        Just(ChannelKind::Green),
        Just(ChannelKind::Blue),
        Just(ChannelKind::Hue),
        Just(ChannelKind::Saturation),
        Just(ChannelKind::Value),
    ]
}

fn any_model() -> impl Strategy<Value = ColorModel> {
    prop_oneof![
        Just(ColorModel::Argb),
        Just(ColorModel::Rgb),
        Just(ColorModel::Hsv),
    ]
}

proptest! {
    /// Decomposing and re-evaluating under ARGB gives back the same color
    #[test]
    fn prop_argb_round_trip(color in any_color()) {
        let channels: Vec<Channel> = ColorModel::Argb
            .channels()
            .iter()
            .map(|&kind| Channel::from_color(kind, color).unwrap())
            .collect();
        prop_assert_eq!(ColorModel::Argb.evaluate(&channels), color);
    }

    /// RGB ignores alpha and always produces the opaque color
    #[test]
    fn prop_rgb_round_trip(color in any_color()) {
        let progress = ColorModel::Rgb.decompose(color);
        prop_assert_eq!(ColorModel::Rgb.evaluate_progress(&progress), color.with_alpha(0xFF));
    }

    /// Every color HSV produces decomposes back to progress that evaluates
    /// to the same color
    #[test]
    fn prop_hsv_round_trip(hue in 0..=350i32, saturation in 0..=100i32, value in 0..=100i32) {
        let color = ColorModel::Hsv.evaluate_progress(&[hue, saturation, value]);
        let progress = ColorModel::Hsv.decompose(color);
        prop_assert_eq!(ColorModel::Hsv.evaluate_progress(&progress), color, "progress {:?}", progress);

        let channels: Vec<Channel> = ColorModel::Hsv
            .channels()
            .iter()
            .map(|&kind| Channel::from_color(kind, color).unwrap())
            .collect();
        prop_assert_eq!(ColorModel::Hsv.evaluate(&channels), color);
    }

    /// Whatever a slider is moved to, the stored progress stays in range
    /// and the text is its decimal form
    #[test]
    fn prop_slide_stays_in_range(kind in any_kind(), progress in any::<i64>()) {
        let mut sync = ChannelSync::new(0, Channel::new(kind, kind.min()).unwrap());
        sync.slide(progress);

        prop_assert!(sync.progress() >= kind.min() && sync.progress() <= kind.max());
        prop_assert_eq!(sync.text(), sync.progress().to_string());
    }

    /// Arbitrary text edits never leave the channel out of range and the
    /// selection always fits the displayed text
    #[test]
    fn prop_text_edit_stays_in_range(kind in any_kind(), text in "\\PC{0,12}", caret in 0usize..16) {
        let mut sync = ChannelSync::new(0, Channel::new(kind, kind.min()).unwrap());
        let (_, edit) = sync.edit_text(&text, TextSelection::caret(caret));

        prop_assert!(sync.progress() >= kind.min() && sync.progress() <= kind.max());
        prop_assert_eq!(&edit.text, &sync.progress().to_string());
        prop_assert!(edit.selection.start <= edit.text.chars().count());
        prop_assert!(edit.selection.end <= edit.text.chars().count());
    }

    /// to_progress is always inside the channel's bounds
    #[test]
    fn prop_to_progress_in_bounds(kind in any_kind(), color in any_color()) {
        let progress = kind.to_progress(color);
        prop_assert!(progress >= kind.min() && progress <= kind.max());
    }

    /// Filtering an already formatted hex string leaves it unchanged
    #[test]
    fn prop_hex_reformat_idempotent(model in any_model(), color in any_color()) {
        let formatted = format_hex(model, color);
        prop_assert_eq!(filter_hex_input(&formatted, model), Some(formatted.clone()));
        prop_assert_eq!(formatted.len(), model.hex_length() + 1);
    }

    /// Filtered hex input is a `#` followed by at most hex_length uppercase
    /// hex digits; anything longer is refused
    #[test]
    fn prop_hex_filter_shape(model in any_model(), input in "\\PC{0,20}") {
        let digits = input.chars().filter(char::is_ascii_hexdigit).count();
        match filter_hex_input(&input, model) {
            Some(filtered) => {
                prop_assert!(filtered.starts_with('#'));
                prop_assert_eq!(filtered.len(), digits + 1);
                prop_assert!(filtered.len() <= model.hex_length() + 1);
                prop_assert!(filtered[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
            }
            None => prop_assert!(digits > model.hex_length()),
        }
    }

    /// Contrast ratio is symmetric for opaque colors and never below 1
    #[test]
    fn prop_contrast_ratio_bounds(fg in any::<u32>(), bg in any::<u32>()) {
        let fg = Color::from_argb_u32(fg | 0xFF00_0000);
        let bg = Color::from_argb_u32(bg | 0xFF00_0000);
        let ratio = contrast_ratio(fg, bg);
        prop_assert!(ratio >= 1.0);
        prop_assert!(ratio <= 21.0 + 1e-9);
        prop_assert!((ratio - contrast_ratio(bg, fg)).abs() < 1e-9);
    }

    /// The search either reaches the ratio or stops at its iteration or
    /// bracket bound
    #[test]
    fn prop_search_meets_ratio_or_hits_bound(
        fg in any_color(),
        bg in any_color(),
        min_ratio in 1.0f64..7.0,
    ) {
        let search = search_contrast(fg, bg, min_ratio);
        let measured = contrast_ratio(search.color, bg);

        prop_assert_eq!(search.satisfied, measured >= min_ratio);
        prop_assert!(
            measured >= min_ratio
                || search.iterations == MAX_SEARCH_ITERATIONS
                || search.bracket_width <= LIGHTNESS_TOLERANCE,
            "stopped early: {:?}",
            search
        );
        prop_assert!(search.iterations <= MAX_SEARCH_ITERATIONS);
    }

    /// Hex text is legible on every swatch, falling back to black or white
    #[test]
    fn prop_palette_text_is_legible(color in any_color()) {
        let palette = PickerPalette::for_color(color);
        prop_assert!(contrast_ratio(palette.hex_text, palette.swatch) >= TEXT_CONTRAST_RATIO);
        prop_assert!(contrast_ratio(palette.button_text, palette.swatch) >= TEXT_CONTRAST_RATIO);
    }

    /// Gray text against black or white can always reach body-text contrast
    #[test]
    fn prop_gray_on_black_or_white_is_satisfied(level in any::<u8>(), on_white in any::<bool>()) {
        let fg = Color::rgb(level, level, level);
        let bg = if on_white { Color::WHITE } else { Color::BLACK };
        let search = search_contrast(fg, bg, 4.5);
        prop_assert!(search.satisfied);
        prop_assert!(search.ratio >= 4.5);
    }
}
