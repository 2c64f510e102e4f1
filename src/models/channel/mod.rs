//! Channels: the numeric degrees of freedom a color model exposes.
//!
//! A [`ChannelKind`] is the constant definition (name, bounds, how to read
//! the channel out of a color and how to tint its slider). A [`Channel`] is
//! one live instance of a kind with its current progress.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::color::Color;
use crate::utils::color_math::{
    hsv_percent, hsv_percent_to_color, hsv_to_color, hue, saturation, value,
};

/// Every channel any color model can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    Alpha,
    Red,
    Green,
    Blue,
    /// Hue in degrees, capped at 350.
    Hue,
    /// HSV saturation scaled to 0..=100.
    Saturation,
    /// HSV value scaled to 0..=100.
    Value,
}

impl ChannelKind {
    /// Label shown next to the channel's slider.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Value => "Value",
        }
    }

    pub const fn min(self) -> i32 {
        0
    }

    pub const fn max(self) -> i32 {
        match self {
            Self::Alpha | Self::Red | Self::Green | Self::Blue => 255,
            Self::Hue => 350,
            Self::Saturation | Self::Value => 100,
        }
    }

    pub fn contains(self, progress: i64) -> bool {
        (self.min() as i64..=self.max() as i64).contains(&progress)
    }

    /// Clamp any integer into this channel's bounds.
    pub fn clamp(self, progress: i64) -> i32 {
        progress.clamp(self.min() as i64, self.max() as i64) as i32
    }

    /// Raw channel value of `color`. May exceed `max` (a hue of 355°) when
    /// the model cannot show `color` at all.
    pub fn extract(self, color: Color) -> i32 {
        match self {
            Self::Alpha => color.alpha() as i32,
            Self::Red => color.red() as i32,
            Self::Green => color.green() as i32,
            Self::Blue => color.blue() as i32,
            Self::Hue => {
                let [h, s, v] = hsv_percent(color, Self::Hue.max());
                if hsv_percent_to_color(h, s, v) == color.with_alpha(0xFF) {
                    h
                } else {
                    hue(color)
                }
            }
            Self::Saturation => hsv_percent(color, Self::Hue.max())[1],
            Self::Value => value(color),
        }
    }

    /// Slider position representing `color`, always within bounds.
    ///
    /// HSV positions are chosen together so that the three of them evaluate
    /// back to `color` whenever HSV can represent it.
    pub fn to_progress(self, color: Color) -> i32 {
        match self {
            Self::Hue => hsv_percent(color, Self::Hue.max())[0],
            Self::Saturation => hsv_percent(color, Self::Hue.max())[1],
            _ => self.clamp(self.extract(color) as i64),
        }
    }

    /// The color seen with only this channel active, used to tint its
    /// slider.
    pub fn isolate(self, color: Color) -> Color {
        match self {
            Self::Alpha => Color::argb(color.alpha(), 0, 0, 0),
            Self::Red => Color::rgb(color.red(), 0, 0),
            Self::Green => Color::rgb(0, color.green(), 0),
            Self::Blue => Color::rgb(0, 0, color.blue()),
            Self::Hue => hsv_to_color(hue(color) as f32, 1.0, 1.0),
            Self::Saturation => {
                hsv_to_color(hue(color) as f32, saturation(color) as f32 / 100.0, 1.0)
            }
            Self::Value => hsv_to_color(hue(color) as f32, 1.0, value(color) as f32 / 100.0),
        }
    }
}

/// A live channel. `progress` never leaves `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    kind: ChannelKind,
    progress: i32,
}

impl Channel {
    /// Create a channel with an explicit starting value.
    pub fn new(kind: ChannelKind, progress: i32) -> Result<Self, ChannelRangeError> {
        if !kind.contains(progress as i64) {
            return Err(ChannelRangeError {
                channel: kind,
                value: progress,
                min: kind.min(),
                max: kind.max(),
            });
        }
        Ok(Self { kind, progress })
    }

    /// Create a channel holding `kind`'s component of `color`.
    ///
    /// Fails when the raw component is out of range; otherwise starts at
    /// [`ChannelKind::to_progress`].
    pub fn from_color(kind: ChannelKind, color: Color) -> Result<Self, ChannelRangeError> {
        Self::new(kind, kind.extract(color))?;
        Ok(Self {
            kind,
            progress: kind.to_progress(color),
        })
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn min(&self) -> i32 {
        self.kind.min()
    }

    pub fn max(&self) -> i32 {
        self.kind.max()
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Store `progress` clamped to bounds and return what was stored.
    pub fn set_progress(&mut self, progress: i64) -> i32 {
        self.progress = self.kind.clamp(progress);
        self.progress
    }
}

/// A channel was given a starting value outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("initial progress {value} for channel {} must be between {min} and {max}", .channel.name())]
pub struct ChannelRangeError {
    pub channel: ChannelKind,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(ChannelKind::Red.max(), 255);
        assert_eq!(ChannelKind::Hue.max(), 350);
        assert_eq!(ChannelKind::Saturation.max(), 100);
        assert_eq!(ChannelKind::Value.min(), 0);
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut channel = Channel::new(ChannelKind::Hue, 10).unwrap();
        assert_eq!(channel.set_progress(360), 350);
        assert_eq!(channel.progress(), 350);
        assert_eq!(channel.set_progress(-4), 0);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Channel::new(ChannelKind::Saturation, 101).unwrap_err();
        assert_eq!(err.channel, ChannelKind::Saturation);
        assert_eq!(err.value, 101);
        assert_eq!(
            err.to_string(),
            "initial progress 101 for channel Saturation must be between 0 and 100"
        );
    }

    #[test]
    fn test_from_color_rejects_hue_above_cap() {
        // hue of this pink is 355 degrees
        let pink = Color::rgb(255, 0, 21);
        assert!(ChannelKind::Hue.extract(pink) > 350);
        assert!(Channel::from_color(ChannelKind::Hue, pink).is_err());
        assert_eq!(ChannelKind::Hue.to_progress(pink), 350);
    }

    #[test]
    fn test_hue_near_cap_is_accepted_when_representable() {
        // reads as 351 degrees but hue 350 reproduces it
        let color = hsv_percent_to_color(344, 3, 90);
        assert!(hue(color) > 350);
        let channel = Channel::from_color(ChannelKind::Hue, color).unwrap();
        assert!(channel.progress() <= 350);
    }

    #[test]
    fn test_hsv_progress_evaluates_back() {
        // rounding alone reads this back as saturation 4
        let color = Color::rgb(26, 25, 25);
        let progress: Vec<i32> = [ChannelKind::Hue, ChannelKind::Saturation, ChannelKind::Value]
            .iter()
            .map(|kind| Channel::from_color(*kind, color).unwrap().progress())
            .collect();
        assert_eq!(
            hsv_to_color(
                progress[0] as f32,
                (progress[1] as f64 / 100.0) as f32,
                (progress[2] as f64 / 100.0) as f32
            ),
            color
        );
    }

    #[test]
    fn test_isolate_rgb() {
        let color = Color::argb(0x40, 10, 20, 30);
        assert_eq!(ChannelKind::Alpha.isolate(color), Color::argb(0x40, 0, 0, 0));
        assert_eq!(ChannelKind::Red.isolate(color), Color::rgb(10, 0, 0));
        assert_eq!(ChannelKind::Green.isolate(color), Color::rgb(0, 20, 0));
        assert_eq!(ChannelKind::Blue.isolate(color), Color::rgb(0, 0, 30));
    }

    #[test]
    fn test_isolate_hue_is_fully_saturated() {
        let dull_green = Color::rgb(100, 140, 100);
        assert_eq!(ChannelKind::Hue.isolate(dull_green), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_isolate_value_keeps_brightness() {
        let dark_red = Color::rgb(128, 0, 0);
        assert_eq!(ChannelKind::Value.isolate(dark_red), Color::rgb(128, 0, 0));
    }
}
