//! Packed 8-bit-per-channel ARGB color value.
//!
//! Every color the picker produces is a `Color`. Components are stored as a
//! single `u32` laid out as `0xAARRGGBB`, which is also the integer a host
//! application persists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An immutable ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Mid-gray, the picker's default initial color.
    pub const GRAY: Color = Color(0xFF88_8888);

    /// Wrap a raw `0xAARRGGBB` value.
    pub const fn from_argb_u32(value: u32) -> Self {
        Self(value)
    }

    /// Build a color from its four components.
    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Build an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::argb(0xFF, red, green, blue)
    }

    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Same color with a different alpha byte.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Composite this color over `background` using source-over blending.
    ///
    /// When the background is opaque the result is opaque.
    pub fn composite_over(self, background: Color) -> Color {
        let fg_a = self.alpha() as u32;
        let bg_a = background.alpha() as u32;
        // a = fg_a + bg_a * (1 - fg_a), scaled by 255
        let a = 0xFF - ((0xFF - bg_a) * (0xFF - fg_a)) / 0xFF;
        if a == 0 {
            return Color::TRANSPARENT;
        }

        let blend = |fg: u8, bg: u8| -> u8 {
            let fg = fg as u32;
            let bg = bg as u32;
            let value = (0xFF * fg * fg_a + bg * bg_a * (0xFF - fg_a)) / (a * 0xFF);
            value.min(0xFF) as u8
        };

        Color::argb(
            a as u8,
            blend(self.red(), background.red()),
            blend(self.green(), background.green()),
            blend(self.blue(), background.blue()),
        )
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (case-insensitive).
    ///
    /// Six-digit input is treated as opaque.
    pub fn parse_hex(input: &str) -> Result<Color, HexColorError> {
        let digits = input.strip_prefix('#').ok_or(HexColorError::MissingHash)?;

        if let Some(index) = digits.find(|c: char| !c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit(index + 1));
        }

        let value = match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(|rgb| 0xFF00_0000 | rgb)
                .map_err(|_| HexColorError::InvalidLength(6))?,
            8 => u32::from_str_radix(digits, 16).map_err(|_| HexColorError::InvalidLength(8))?,
            len => return Err(HexColorError::InvalidLength(len)),
        };

        Ok(Color(value))
    }

    /// Full `#AARRGGBB` representation, uppercase.
    pub fn to_hex_string(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::GRAY
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s.trim())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Reasons a hex string is not a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexColorError {
    #[error("hex color must start with '#'")]
    MissingHash,
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit at index {0}")]
    InvalidDigit(usize),
}
