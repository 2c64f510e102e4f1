//! The three fixed color models a picker can be built with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::channel::{Channel, ChannelKind};
use crate::models::color::Color;
use crate::utils::color_math::{hsv_percent, hsv_percent_to_color};

const ARGB_CHANNELS: [ChannelKind; 4] = [
    ChannelKind::Alpha,
    ChannelKind::Red,
    ChannelKind::Green,
    ChannelKind::Blue,
];

const HSV_CHANNELS: [ChannelKind; 3] = [
    ChannelKind::Hue,
    ChannelKind::Saturation,
    ChannelKind::Value,
];

/// How a color is split into channels and put back together.
///
/// Serialized by name; unknown names deserialize to [`ColorModel::Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorModel {
    /// Alpha, red, green, blue.
    Argb,
    /// Red, green, blue. Always opaque.
    #[default]
    Rgb,
    /// Hue, saturation, value. Always opaque.
    Hsv,
}

impl ColorModel {
    pub const ALL: [ColorModel; 3] = [ColorModel::Argb, ColorModel::Rgb, ColorModel::Hsv];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Argb => "ARGB",
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
        }
    }

    /// Exact, case-sensitive lookup. Anything unrecognised is RGB.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == name)
            .unwrap_or_default()
    }

    /// Channels in display order; also the positional order for
    /// [`evaluate`](Self::evaluate).
    pub fn channels(self) -> &'static [ChannelKind] {
        match self {
            Self::Argb => &ARGB_CHANNELS,
            Self::Rgb => &ARGB_CHANNELS[1..],
            Self::Hsv => &HSV_CHANNELS,
        }
    }

    /// Number of hex digits in this model's hex representation.
    pub const fn hex_length(self) -> usize {
        match self {
            Self::Argb => 8,
            Self::Rgb | Self::Hsv => 6,
        }
    }

    /// Color represented by the current channel values.
    pub fn evaluate(self, channels: &[Channel]) -> Color {
        let progress: Vec<i32> = channels.iter().map(Channel::progress).collect();
        self.evaluate_progress(&progress)
    }

    /// Color represented by positional progress values.
    ///
    /// Values are clamped into each channel's bounds; missing trailing
    /// values count as 0.
    pub fn evaluate_progress(self, progress: &[i32]) -> Color {
        let kinds = self.channels();
        let at = |index: usize| -> i32 {
            let raw = progress.get(index).copied().unwrap_or(0);
            kinds.get(index).map_or(raw, |kind| kind.clamp(raw as i64))
        };
        let byte = |index: usize| at(index) as u8;

        match self {
            Self::Argb => Color::argb(byte(0), byte(1), byte(2), byte(3)),
            Self::Rgb => Color::rgb(byte(0), byte(1), byte(2)),
            Self::Hsv => hsv_percent_to_color(at(0), at(1), at(2)),
        }
    }

    /// Progress values representing `color`, in channel order.
    pub fn decompose(self, color: Color) -> Vec<i32> {
        if self == Self::Hsv {
            return hsv_percent(color, ChannelKind::Hue.max()).to_vec();
        }
        self.channels()
            .iter()
            .map(|kind| kind.to_progress(color))
            .collect()
    }

    /// Uppercase hex digits of `color`, without the `#`.
    pub fn to_hex(self, color: Color) -> String {
        match self {
            Self::Argb => format!("{:08X}", color.to_argb_u32()),
            Self::Rgb => format!("{:06X}", color.to_argb_u32() & 0x00FF_FFFF),
            Self::Hsv => Self::Rgb.to_hex(color),
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ColorModel {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ColorModel> for String {
    fn from(model: ColorModel) -> Self {
        model.name().to_string()
    }
}
