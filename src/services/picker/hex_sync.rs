//! The hex text field: input filtering, parsing and reformatting.

use crate::models::color::Color;
use crate::models::color_model::ColorModel;

/// Result of feeding user input to the hex field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexEdit {
    /// Filtered text the field should now contain.
    pub text: String,
    /// The color the text parsed to, if it is complete and valid.
    pub color: Option<Color>,
}

/// Restrict raw input to what a hex field for `model` may hold.
///
/// Keeps `0-9`/`A-F` (uppercased) behind exactly one leading `#`. An empty
/// field becomes `#`. Input with more than `hex_length` digits is refused
/// with `None`, the way a full field refuses another keystroke.
pub fn filter_hex_input(input: &str, model: ColorModel) -> Option<String> {
    let mut filtered = String::with_capacity(model.hex_length() + 1);
    filtered.push('#');
    filtered.extend(
        input
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_hexdigit),
    );

    if filtered.len() > model.hex_length() + 1 {
        None
    } else {
        Some(filtered)
    }
}

/// Where a caret at char index `caret` of the raw `input` lands once the
/// field holds `edit.text`.
pub fn hex_caret(input: &str, caret: usize, model: ColorModel, edit: &HexEdit) -> usize {
    let len = edit.text.chars().count();
    match filter_hex_input(input, model) {
        Some(_) => {
            let digits = input
                .chars()
                .take(caret)
                .filter(char::is_ascii_hexdigit)
                .count();
            (1 + digits).min(len)
        }
        // refused: undo the inserted characters
        None => {
            let inserted = input.chars().count().saturating_sub(len);
            caret.saturating_sub(inserted).min(len)
        }
    }
}

/// `"#"` followed by `model`'s hex digits for `color`.
pub fn format_hex(model: ColorModel, color: Color) -> String {
    format!("#{}", model.to_hex(color))
}

/// Owns the hex field's current text.
#[derive(Debug, Clone)]
pub struct HexSync {
    model: ColorModel,
    text: String,
}

impl HexSync {
    pub fn new(model: ColorModel, color: Color) -> Self {
        Self {
            model,
            text: format_hex(model, color),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text with the formatted `color`.
    pub fn reformat(&mut self, color: Color) -> &str {
        self.text = format_hex(self.model, color);
        &self.text
    }

    /// Filter `input`, keep it as the field's text and try to parse it.
    pub fn accept_input(&mut self, input: &str) -> HexEdit {
        let Some(text) = filter_hex_input(input, self.model) else {
            log::trace!("hex input {:?} refused, field is full", input);
            return HexEdit {
                text: self.text.clone(),
                color: None,
            };
        };
        self.text = text;

        let color = match Color::parse_hex(&self.text) {
            Ok(color) => Some(color),
            Err(err) => {
                log::trace!("hex input {:?} not applied: {}", self.text, err);
                None
            }
        };

        HexEdit {
            text: self.text.clone(),
            color,
        }
    }
}
