//! Slider/text synchronization for a single channel.
//!
//! Every write goes through one guarded update: the channel enters
//! `Updating`, stores the clamped progress, refreshes its text, and returns
//! to `Idle` before control leaves the call. User edits (slider, text)
//! produce a [`ChannelChanged`] notification for the owning session;
//! updates pushed in from a parsed color never do.

use crate::models::channel::Channel;
use crate::models::color::Color;

/// Where an update to a channel came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOrigin {
    Slider,
    Text,
    /// Pushed from an aggregate color (hex edit). Never notifies.
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Updating(EditOrigin),
}

/// A user edit changed a channel's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelChanged {
    pub index: usize,
    pub progress: i32,
}

/// Character-index selection inside a text field. `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
}

impl TextSelection {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn caret(index: usize) -> Self {
        Self::new(index, index)
    }

    fn clamp_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// What the host should display after a text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTextEdit {
    pub text: String,
    pub selection: TextSelection,
    /// The text differs from what the user typed.
    pub reformatted: bool,
}

/// A channel together with the text shown in its numeric field.
#[derive(Debug, Clone)]
pub struct ChannelSync {
    index: usize,
    channel: Channel,
    text: String,
    state: SyncState,
}

impl ChannelSync {
    pub fn new(index: usize, channel: Channel) -> Self {
        Self {
            index,
            channel,
            text: channel.progress().to_string(),
            state: SyncState::Idle,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn progress(&self) -> i32 {
        self.channel.progress()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// The slider moved.
    pub fn slide(&mut self, progress: i64) -> Option<ChannelChanged> {
        self.update(EditOrigin::Slider, progress)
    }

    /// The numeric field was edited to `text` with `selection`.
    ///
    /// Non-numeric text counts as 0 and puts the caret after the first
    /// character. A run of digits too large to parse saturates to `max`.
    pub fn edit_text(
        &mut self,
        text: &str,
        selection: TextSelection,
    ) -> (Option<ChannelChanged>, ChannelTextEdit) {
        let (progress, selection) = match parse_progress(text) {
            Some(progress) => (progress, selection),
            None => (0, TextSelection::caret(1)),
        };

        let change = self.update(EditOrigin::Text, progress);
        let len = self.text.chars().count();

        let edit = ChannelTextEdit {
            text: self.text.clone(),
            selection: selection.clamp_to(len),
            reformatted: self.text != text,
        };
        (change, edit)
    }

    /// Move to the value `color` represents without notifying.
    pub fn set_by_color(&mut self, color: Color) {
        let progress = self.channel.kind().to_progress(color);
        self.update(EditOrigin::Color, progress as i64);
    }

    // `Updating` never outlives this call under `&mut self`.
    fn update(&mut self, origin: EditOrigin, progress: i64) -> Option<ChannelChanged> {
        if let SyncState::Updating(active) = self.state {
            log::trace!(
                "channel {} ignoring {:?} update while {:?} update is active",
                self.channel.name(),
                origin,
                active
            );
            return None;
        }

        self.state = SyncState::Updating(origin);

        let previous = self.channel.progress();
        let stored = self.channel.set_progress(progress);
        self.text = stored.to_string();

        let notification = match origin {
            EditOrigin::Color => None,
            EditOrigin::Slider | EditOrigin::Text if stored != previous => Some(ChannelChanged {
                index: self.index,
                progress: stored,
            }),
            EditOrigin::Slider | EditOrigin::Text => None,
        };

        self.state = SyncState::Idle;
        notification
    }
}

fn parse_progress(text: &str) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(progress) => Some(progress),
        Err(_) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => Some(i64::MAX),
        Err(_) => None,
    }
}
