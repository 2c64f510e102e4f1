//! Callbacks a host registers to receive the chosen color.

use crate::models::color::Color;

/// Receives the confirm/cancel button bar's clicks.
pub trait ButtonBarListener {
    fn on_positive_button_click(&mut self, color: Color);
    fn on_negative_button_click(&mut self);
}

/// Receives clicks on the preview when the picker is used inline.
pub trait PreviewClickListener {
    fn on_click(&mut self, color: Color);
}

impl<F: FnMut(Color)> PreviewClickListener for F {
    fn on_click(&mut self, color: Color) {
        self(color)
    }
}

/// A [`ButtonBarListener`] made of two closures.
pub struct ButtonBarCallbacks<P, N> {
    on_positive: P,
    on_negative: N,
}

impl<P, N> ButtonBarCallbacks<P, N>
where
    P: FnMut(Color),
    N: FnMut(),
{
    pub fn new(on_positive: P, on_negative: N) -> Self {
        Self {
            on_positive,
            on_negative,
        }
    }
}

impl<P, N> ButtonBarListener for ButtonBarCallbacks<P, N>
where
    P: FnMut(Color),
    N: FnMut(),
{
    fn on_positive_button_click(&mut self, color: Color) {
        (self.on_positive)(color)
    }

    fn on_negative_button_click(&mut self) {
        (self.on_negative)()
    }
}
