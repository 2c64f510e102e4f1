//! CIE L*a*b* conversions (D65 white point, sRGB primaries).
//!
//! XYZ values are on the 0..=100 scale. Converting back to a [`Color`]
//! clamps each channel into `0..=255`, so Lab values outside the sRGB gamut
//! land on the nearest displayable channel values.

use crate::models::color::Color;

const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 903.3;

/// L*a*b* components. Lightness runs 0..=100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

/// Convert a color to XYZ. Alpha is ignored.
pub fn color_to_xyz(color: Color) -> [f64; 3] {
    let r = srgb_to_linear(color.red());
    let g = srgb_to_linear(color.green());
    let b = srgb_to_linear(color.blue());

    [
        100.0 * (r * 0.4124 + g * 0.3576 + b * 0.1805),
        100.0 * (r * 0.2126 + g * 0.7152 + b * 0.0722),
        100.0 * (r * 0.0193 + g * 0.1192 + b * 0.9505),
    ]
}

/// Convert XYZ to an opaque color, clamping out-of-gamut channels.
pub fn xyz_to_color(xyz: [f64; 3]) -> Color {
    let [x, y, z] = xyz;
    let r = (x * 3.2406 + y * -1.5372 + z * -0.4986) / 100.0;
    let g = (x * -0.9689 + y * 1.8758 + z * 0.0415) / 100.0;
    let b = (x * 0.0557 + y * -0.2040 + z * 1.0570) / 100.0;

    let to_byte = |c: f64| (linear_to_srgb(c) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::rgb(to_byte(r), to_byte(g), to_byte(b))
}

fn pivot_xyz(component: f64) -> f64 {
    if component > EPSILON {
        component.cbrt()
    } else {
        (KAPPA * component + 16.0) / 116.0
    }
}

pub fn xyz_to_lab(xyz: [f64; 3]) -> Lab {
    let fx = pivot_xyz(xyz[0] / WHITE_X);
    let fy = pivot_xyz(xyz[1] / WHITE_Y);
    let fz = pivot_xyz(xyz[2] / WHITE_Z);

    Lab {
        l: (116.0 * fy - 16.0).max(0.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn lab_to_xyz(lab: Lab) -> [f64; 3] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let fx3 = fx.powi(3);
    let xr = if fx3 > EPSILON { fx3 } else { (116.0 * fx - 16.0) / KAPPA };
    let yr = if lab.l > KAPPA * EPSILON { fy.powi(3) } else { lab.l / KAPPA };
    let fz3 = fz.powi(3);
    let zr = if fz3 > EPSILON { fz3 } else { (116.0 * fz - 16.0) / KAPPA };

    [xr * WHITE_X, yr * WHITE_Y, zr * WHITE_Z]
}

pub fn color_to_lab(color: Color) -> Lab {
    xyz_to_lab(color_to_xyz(color))
}

pub fn lab_to_color(lab: Lab) -> Color {
    xyz_to_color(lab_to_xyz(lab))
}

/// WCAG relative luminance, `0.0..=1.0`.
pub fn relative_luminance(color: Color) -> f64 {
    color_to_xyz(color)[1] / 100.0
}
