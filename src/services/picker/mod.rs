//! The picker session: one color model, its live channels, the hex field
//! and the current color, kept consistent through synchronous update
//! cascades.
//!
//! Host input arrives through the `on_*` methods. Each one claims the
//! session's [`Cascade`] token for the duration of the call; input that
//! arrives while a cascade is running is an echo of the session's own
//! updates and is dropped.

mod channel_sync;
mod hex_sync;
mod listener;
mod palette;
mod view;


pub use channel_sync::{
    ChannelChanged, ChannelSync, ChannelTextEdit, EditOrigin, SyncState, TextSelection,
};
pub use hex_sync::{filter_hex_input, format_hex, hex_caret, HexEdit, HexSync};
pub use listener::{ButtonBarCallbacks, ButtonBarListener, PreviewClickListener};
pub use palette::{PickerPalette, PREVIEW_BACKDROP};
pub use view::PickerView;

#[cfg(test)]
pub use view::MockPickerView;

use thiserror::Error;

use crate::models::channel::{Channel, ChannelRangeError};
use crate::models::color::Color;
use crate::models::color_model::ColorModel;

pub const DEFAULT_COLOR: Color = Color::GRAY;
pub const DEFAULT_MODEL: ColorModel = ColorModel::Rgb;

#[derive(Debug, Error)]
pub enum PickerError {
    /// The initial color cannot be shown by the chosen model's channels.
    #[error("invalid picker configuration: {0}")]
    ProgressOutOfRange(#[from] ChannelRangeError),
}

/// Which surface started the update currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cascade {
    Idle,
    ChannelDriven(usize),
    HexDriven,
}

pub struct ColorPicker<V: PickerView> {
    model: ColorModel,
    channels: Vec<ChannelSync>,
    hex: HexSync,
    current: Color,
    palette: PickerPalette,
    cascade: Cascade,
    view: V,
    button_bar: Option<Box<dyn ButtonBarListener>>,
    preview_click: Option<Box<dyn PreviewClickListener>>,
}

impl<V: PickerView> ColorPicker<V> {
    /// Build a session showing `initial` under `model` and render it once.
    ///
    /// Fails when a channel of `model` cannot represent `initial`, e.g. an
    /// HSV picker for a color whose hue is above 350°.
    pub fn new(initial: Color, model: ColorModel, view: V) -> Result<Self, PickerError> {
        let channels = model
            .channels()
            .iter()
            .enumerate()
            .map(|(index, kind)| {
                Channel::from_color(*kind, initial).map(|channel| ChannelSync::new(index, channel))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let current = model.evaluate(&Self::channel_values(&channels));
        log::debug!("picker created: model={} initial={} current={}", model, initial, current);

        let mut picker = Self {
            model,
            channels,
            hex: HexSync::new(model, current),
            current,
            palette: PickerPalette::for_color(current),
            cascade: Cascade::Idle,
            view,
            button_bar: None,
            preview_click: None,
        };
        picker.render_all();
        Ok(picker)
    }

    /// Gray, RGB.
    pub fn with_defaults(view: V) -> Result<Self, PickerError> {
        Self::new(DEFAULT_COLOR, DEFAULT_MODEL, view)
    }

    pub fn model(&self) -> ColorModel {
        self.model
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn channels(&self) -> impl Iterator<Item = &Channel> + '_ {
        self.channels.iter().map(ChannelSync::channel)
    }

    pub fn channel(&self, index: usize) -> Option<&ChannelSync> {
        self.channels.get(index)
    }

    pub fn hex_text(&self) -> &str {
        self.hex.text()
    }

    pub fn palette(&self) -> PickerPalette {
        self.palette
    }

    pub fn is_idle(&self) -> bool {
        self.cascade == Cascade::Idle
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The user dragged channel `index`'s slider to `progress`.
    pub fn on_slider_changed(&mut self, index: usize, progress: i32) {
        if !self.begin(Cascade::ChannelDriven(index)) {
            return;
        }

        if let Some(sync) = self.channels.get_mut(index) {
            let change = sync.slide(progress as i64);
            self.view.show_channel(index, sync.progress(), sync.text());
            if let Some(change) = change {
                self.channel_changed(change);
            }
        } else {
            log::warn!("slider event for unknown channel {}", index);
        }

        self.end();
    }

    /// The user edited channel `index`'s numeric field.
    ///
    /// Returns the text and selection the field should show, or `None` when
    /// the edit was dropped as an echo.
    pub fn on_channel_text_edited(
        &mut self,
        index: usize,
        text: &str,
        selection: TextSelection,
    ) -> Option<ChannelTextEdit> {
        if !self.begin(Cascade::ChannelDriven(index)) {
            return None;
        }

        let edit = match self.channels.get_mut(index) {
            Some(sync) => {
                let (change, edit) = sync.edit_text(text, selection);
                self.view.show_channel(index, sync.progress(), sync.text());
                if let Some(change) = change {
                    self.channel_changed(change);
                }
                Some(edit)
            }
            None => {
                log::warn!("text event for unknown channel {}", index);
                None
            }
        };

        self.end();
        edit
    }

    /// The user edited the hex field.
    ///
    /// The returned text is the filtered input the field should hold. When
    /// it parses, the color is pushed into every channel without the hex
    /// field being rewritten.
    pub fn on_hex_edited(&mut self, input: &str) -> HexEdit {
        if !self.begin(Cascade::HexDriven) {
            return HexEdit {
                text: self.hex.text().to_string(),
                color: None,
            };
        }

        let edit = self.hex.accept_input(input);
        if let Some(color) = edit.color {
            log::debug!("hex {} applied as {}", edit.text, color);
            self.current = color;
            for sync in &mut self.channels {
                sync.set_by_color(color);
                self.view.show_channel(sync.index(), sync.progress(), sync.text());
            }
            self.apply_color();
        }

        self.end();
        edit
    }

    /// Show or hide the confirm/cancel bar. `None` hides it.
    pub fn enable_button_bar(&mut self, listener: Option<Box<dyn ButtonBarListener>>) {
        self.view.set_button_bar_visible(listener.is_some());
        self.button_bar = listener;
    }

    /// Make the preview clickable for inline use.
    pub fn enable_preview_click(&mut self, listener: Box<dyn PreviewClickListener>) {
        self.preview_click = Some(listener);
        self.view.set_preview_clickable(true);
        self.apply_color();
    }

    /// The confirm button was pressed. Returns whether a listener got it.
    pub fn confirm(&mut self) -> bool {
        let color = self.current;
        match self.button_bar.as_mut() {
            Some(listener) => {
                log::info!("color confirmed: {}", color);
                listener.on_positive_button_click(color);
                true
            }
            None => false,
        }
    }

    /// The cancel button was pressed. Returns whether a listener got it.
    pub fn cancel(&mut self) -> bool {
        match self.button_bar.as_mut() {
            Some(listener) => {
                listener.on_negative_button_click();
                true
            }
            None => false,
        }
    }

    /// The preview was clicked. Returns whether a listener got it.
    pub fn click_preview(&mut self) -> bool {
        let color = self.current;
        match self.preview_click.as_mut() {
            Some(listener) => {
                listener.on_click(color);
                true
            }
            None => false,
        }
    }

    /// Claim the cascade token. Every entry point takes `&mut self`, so a
    /// running cascade cannot be re-entered through the view; the token
    /// mainly tells [`apply_color`](Self::apply_color) which surface drives
    /// the update.
    fn begin(&mut self, cascade: Cascade) -> bool {
        if self.cascade != Cascade::Idle {
            log::trace!("dropping {:?} input during {:?}", cascade, self.cascade);
            return false;
        }
        self.cascade = cascade;
        true
    }

    fn end(&mut self) {
        self.cascade = Cascade::Idle;
    }

    fn channel_changed(&mut self, change: ChannelChanged) {
        self.current = self.model.evaluate(&Self::channel_values(&self.channels));
        log::debug!(
            "channel {} -> {}, color {}",
            change.index,
            change.progress,
            self.current
        );
        self.apply_color();
    }

    fn render_all(&mut self) {
        for sync in &self.channels {
            self.view.show_channel(sync.index(), sync.progress(), sync.text());
        }
        self.apply_color();
    }

    /// Refresh every surface that depends on the current color.
    fn apply_color(&mut self) {
        let color = self.current;
        self.palette = PickerPalette::for_color(color);

        self.view.show_preview(self.palette.swatch);
        self.view.style_buttons(self.palette.button_text);
        for sync in &self.channels {
            let tint = sync.channel().kind().isolate(color);
            self.view.tint_channel(sync.index(), tint, color);
        }

        if self.cascade != Cascade::HexDriven {
            let text = self.hex.reformat(color);
            self.view.show_hex(text);
        }
        self.view
            .style_hex(self.palette.hex_text, self.palette.hex_highlight);
    }

    fn channel_values(channels: &[ChannelSync]) -> Vec<Channel> {
        channels.iter().map(|sync| *sync.channel()).collect()
    }
}
