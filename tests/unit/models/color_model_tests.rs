// Table-driven tests for the color models and their channels

use chroma_picker::models::channel::ChannelKind;
use chroma_picker::models::color::Color;
use chroma_picker::models::color_model::ColorModel;
use test_case::test_case;

#[test_case("ARGB", ColorModel::Argb ; "argb")]
#[test_case("RGB", ColorModel::Rgb ; "rgb")]
#[test_case("HSV", ColorModel::Hsv ; "hsv")]
#[test_case("hsv", ColorModel::Rgb ; "lowercase falls back to rgb")]
#[test_case("CMYK", ColorModel::Rgb ; "unknown falls back to rgb")]
#[test_case("", ColorModel::Rgb ; "empty falls back to rgb")]
fn test_from_name(name: &str, expected: ColorModel) {
    assert_eq!(ColorModel::from_name(name), expected);
}

#[test_case(ColorModel::Argb, 8, 4 ; "argb")]
#[test_case(ColorModel::Rgb, 6, 3 ; "rgb")]
#[test_case(ColorModel::Hsv, 6, 3 ; "hsv")]
fn test_hex_length_and_channel_count(model: ColorModel, hex_length: usize, channels: usize) {
    assert_eq!(model.hex_length(), hex_length);
    assert_eq!(model.channels().len(), channels);
}

#[test_case(ChannelKind::Alpha, "Alpha", 255)]
#[test_case(ChannelKind::Red, "Red", 255)]
#[test_case(ChannelKind::Green, "Green", 255)]
#[test_case(ChannelKind::Blue, "Blue", 255)]
#[test_case(ChannelKind::Hue, "Hue", 350)]
#[test_case(ChannelKind::Saturation, "Saturation", 100)]
#[test_case(ChannelKind::Value, "Value", 100)]
fn test_channel_bounds(kind: ChannelKind, name: &str, max: i32) {
    assert_eq!(kind.name(), name);
    assert_eq!(kind.min(), 0);
    assert_eq!(kind.max(), max);
}

#[test_case(Color::rgb(255, 0, 0), [0, 100, 100] ; "red")]
#[test_case(Color::rgb(0, 255, 0), [120, 100, 100] ; "green")]
#[test_case(Color::rgb(0, 0, 255), [240, 100, 100] ; "blue")]
#[test_case(Color::rgb(255, 255, 0), [60, 100, 100] ; "yellow")]
#[test_case(Color::rgb(0, 255, 255), [180, 100, 100] ; "cyan")]
#[test_case(Color::BLACK, [0, 0, 0] ; "black")]
#[test_case(Color::WHITE, [0, 0, 100] ; "white")]
fn test_hsv_exact_round_trip(color: Color, expected: [i32; 3]) {
    let progress = ColorModel::Hsv.decompose(color);
    assert_eq!(progress, expected.to_vec());
    assert_eq!(ColorModel::Hsv.evaluate_progress(&progress), color);
}

#[test_case(ColorModel::Argb, Color::argb(0x80, 0xFF, 0x00, 0x00), "80FF0000" ; "argb keeps alpha")]
#[test_case(ColorModel::Rgb, Color::argb(0x80, 0xFF, 0x00, 0x00), "FF0000" ; "rgb drops alpha")]
#[test_case(ColorModel::Hsv, Color::rgb(0x12, 0xAB, 0xEF), "12ABEF" ; "hsv formats as rgb")]
fn test_to_hex(model: ColorModel, color: Color, expected: &str) {
    assert_eq!(model.to_hex(color), expected);
}

#[test_case(ColorModel::Rgb, &[300, -4, 128], Color::rgb(255, 0, 128) ; "rgb clamps")]
#[test_case(ColorModel::Hsv, &[120, 150, 250], Color::rgb(0, 255, 0) ; "hsv clamps saturation and value")]
fn test_evaluate_clamps(model: ColorModel, progress: &[i32], expected: Color) {
    assert_eq!(model.evaluate_progress(progress), expected);
}
