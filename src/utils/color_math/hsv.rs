//! HSV conversions.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and value in
//! `[0.0, 1.0]`. The integer helpers scale saturation and value to `0..=100`
//! and truncate, which is how the HSV channels display them.

use crate::models::color::Color;

/// Convert a color to `[hue, saturation, value]`. Alpha is ignored.
pub fn color_to_hsv(color: Color) -> [f32; 3] {
    let r = color.red() as i32;
    let g = color.green() as i32;
    let b = color.blue() as i32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max as f32 / 255.0;
    let delta = max - min;

    if delta == 0 {
        return [0.0, 0.0, value];
    }

    let saturation = delta as f32 / max as f32;
    let delta = delta as f32;

    let mut hue = if r == max {
        (g - b) as f32 / delta
    } else if g == max {
        2.0 + (b - r) as f32 / delta
    } else {
        4.0 + (r - g) as f32 / delta
    };

    hue *= 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    [hue, saturation, value]
}

/// Convert HSV components to an opaque color.
///
/// Out-of-range saturation and value are pinned to `[0, 1]`; a hue outside
/// `[0, 360)` is treated as 0.
pub fn hsv_to_color(hue: f32, saturation: f32, value: f32) -> Color {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    let to_byte = |x: f32| (x * 255.0).round().clamp(0.0, 255.0) as u8;

    if s <= 0.0 {
        let gray = to_byte(v);
        return Color::rgb(gray, gray, gray);
    }

    let hx = if (0.0..360.0).contains(&hue) { hue / 60.0 } else { 0.0 };
    let sector = hx.floor();
    let f = hx - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::rgb(to_byte(r), to_byte(g), to_byte(b))
}

/// Hue in whole degrees, `0..=359`, rounded.
pub fn hue(color: Color) -> i32 {
    (color_to_hsv(color)[0].round() as i32).min(359)
}

/// Saturation scaled to `0..=100`, rounded.
pub fn saturation(color: Color) -> i32 {
    (color_to_hsv(color)[1] * 100.0).round() as i32
}

/// Value (brightness) scaled to `0..=100`, rounded.
pub fn value(color: Color) -> i32 {
    (color_to_hsv(color)[2] * 100.0).round() as i32
}

/// Opaque color for integer degrees and percentages.
pub fn hsv_percent_to_color(hue: i32, saturation: i32, value: i32) -> Color {
    hsv_to_color(
        hue as f32,
        (saturation as f64 / 100.0) as f32,
        (value as f64 / 100.0) as f32,
    )
}

/// Integer `[hue, saturation, value]` with hue capped at `max_hue`.
///
/// Rounding each component alone does not always map back to the same
/// 8-bit color, so when it misses, hue is nudged by one degree and
/// saturation is searched outward until [`hsv_percent_to_color`]
/// reproduces `color`. Value is always exact. Colors no triple reaches
/// (hues above `max_hue`) keep the rounded components.
pub fn hsv_percent(color: Color, max_hue: i32) -> [i32; 3] {
    let target = color.with_alpha(0xFF);
    let base = [hue(color).min(max_hue), saturation(color), value(color)];
    if hsv_percent_to_color(base[0], base[1], base[2]) == target {
        return base;
    }

    let [h, s, v] = base;
    for distance in 1..=101 {
        for dh in [0, -1, 1] {
            let hue = h + dh;
            if !(0..=max_hue).contains(&hue) {
                continue;
            }
            let reach = distance - dh.abs();
            for saturation in [s - reach, s + reach] {
                if (0..=100).contains(&saturation)
                    && hsv_percent_to_color(hue, saturation, v) == target
                {
                    return [hue, saturation, v];
                }
            }
        }
    }

    log::trace!("no exact HSV components for {}", color);
    base
}
