use egui::text::{CCursor, CCursorRange};
use egui::{vec2, Color32, RichText, Sense, Slider, TextEdit, TextStyle, Ui};

use super::PickerDisplay;
use crate::models::color::Color;
use crate::services::picker::{hex_caret, ColorPicker, TextSelection};

const PREVIEW_HEIGHT: f32 = 96.0;
const LABEL_WIDTH: f32 = 80.0;
const VALUE_WIDTH: f32 = 40.0;

/// Result of rendering the picker for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    None,
    Confirm(Color),
    Cancel,
    PreviewClicked(Color),
}

/// Render the picker and feed this frame's edits back into the session
pub fn render_color_picker(ui: &mut Ui, picker: &mut ColorPicker<PickerDisplay>) -> PickerAction {
    let mut action = PickerAction::None;

    if render_preview(ui, picker) {
        let color = picker.current_color();
        picker.click_preview();
        action = PickerAction::PreviewClicked(color);
    }

    ui.add_space(8.0);

    for index in 0..picker.view().rows.len() {
        render_channel_row(ui, picker, index);
        ui.add_space(4.0);
    }

    ui.add_space(4.0);
    render_hex_field(ui, picker);

    if picker.view().button_bar_visible {
        ui.add_space(8.0);
        ui.separator();
        let text_color = picker.view().button_text;
        ui.horizontal(|ui| {
            if ui.button(RichText::new("Cancel").color(text_color)).clicked() {
                picker.cancel();
                action = PickerAction::Cancel;
            }
            if ui.button(RichText::new("OK").color(text_color)).clicked() {
                let color = picker.current_color();
                picker.confirm();
                action = PickerAction::Confirm(color);
            }
        });
    }

    action
}

/// Paint the swatch; returns true when it was clicked
fn render_preview(ui: &mut Ui, picker: &ColorPicker<PickerDisplay>) -> bool {
    let display = picker.view();
    let sense = if display.preview_clickable {
        Sense::click()
    } else {
        Sense::hover()
    };

    let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), PREVIEW_HEIGHT), sense);
    ui.painter().rect_filled(rect, 4.0, display.preview);

    if display.preview_clickable && response.hovered() {
        ui.painter()
            .rect_stroke(rect, 4.0, egui::Stroke::new(2.0, display.button_text));
    }

    response.clicked()
}

fn render_channel_row(ui: &mut Ui, picker: &mut ColorPicker<PickerDisplay>, index: usize) {
    let row = picker.view().rows[index].clone();

    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(row.label));

        ui.scope(|ui| {
            let visuals = ui.visuals_mut();
            visuals.selection.bg_fill = row.tint;
            visuals.widgets.inactive.bg_fill = row.tint;
            visuals.widgets.hovered.bg_fill = row.tint;
            visuals.widgets.active.bg_fill = row.tint;

            let mut value = row.progress;
            let slider = Slider::new(&mut value, row.min..=row.max)
                .show_value(false)
                .trailing_fill(true);
            if ui.add(slider).changed() {
                picker.on_slider_changed(index, value);
            }
        });

        ui.scope(|ui| {
            ui.visuals_mut().selection.bg_fill = with_alpha(row.highlight, 96);

            let mut text = row.text.clone();
            let output = TextEdit::singleline(&mut text)
                .desired_width(VALUE_WIDTH)
                .show(ui);

            if output.response.changed() {
                let selection = output
                    .cursor_range
                    .map(|range| {
                        TextSelection::new(range.primary.ccursor.index, range.secondary.ccursor.index)
                    })
                    .unwrap_or_else(|| TextSelection::caret(text.chars().count()));

                if let Some(edit) = picker.on_channel_text_edited(index, &text, selection) {
                    if edit.reformatted {
                        let mut state = output.state;
                        state.cursor.set_char_range(Some(CCursorRange::two(
                            CCursor::new(edit.selection.start),
                            CCursor::new(edit.selection.end),
                        )));
                        state.store(ui.ctx(), output.response.id);
                    }
                }
            }
        });
    });
}

fn render_hex_field(ui: &mut Ui, picker: &mut ColorPicker<PickerDisplay>) {
    let display = picker.view();
    let mut text = display.hex_text.clone();
    let text_color = display.hex_text_color;
    let highlight = display.hex_highlight;
    let background = display.preview;
    let width = display.hex_width;

    ui.horizontal(|ui| {
        ui.label("Hex:");
        ui.scope(|ui| {
            let visuals = ui.visuals_mut();
            visuals.extreme_bg_color = background;
            visuals.selection.bg_fill = with_alpha(highlight, 96);
            visuals.selection.stroke.color = highlight;
            visuals.widgets.inactive.bg_stroke.color = highlight;

            let output = TextEdit::singleline(&mut text)
                .font(TextStyle::Monospace)
                .text_color(text_color)
                .desired_width(width)
                .show(ui);

            if output.response.changed() {
                let edit = picker.on_hex_edited(&text);
                if edit.text != text {
                    let caret = output
                        .cursor_range
                        .map_or(text.chars().count(), |range| range.primary.ccursor.index);
                    let caret = hex_caret(&text, caret, picker.model(), &edit);

                    let mut state = output.state;
                    state
                        .cursor
                        .set_char_range(Some(CCursorRange::one(CCursor::new(caret))));
                    state.store(ui.ctx(), output.response.id);
                }
                picker.view_mut().hex_text = edit.text;
            }
        });
    });
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
