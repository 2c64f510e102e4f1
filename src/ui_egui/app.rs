use anyhow::Result;
use egui::RichText;

use super::picker::{render_color_picker, to_color32, PickerAction, PickerDisplay};
use crate::models::color::Color;
use crate::models::color_model::ColorModel;
use crate::models::settings::PickerSettings;
use crate::services::picker::{ButtonBarCallbacks, ColorPicker, PickerError, DEFAULT_COLOR};
use crate::services::settings::SettingsService;

/// Demo window hosting a single picker session.
pub struct PickerApp {
    settings_service: SettingsService,
    settings: PickerSettings,
    picker: ColorPicker<PickerDisplay>,
    last_result: Option<PickerAction>,
}

impl PickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let settings_service = SettingsService::from_project_dirs();
        let settings = settings_service.load_or_default();
        log::info!(
            "Loaded picker settings: model={}, color={}",
            settings.model,
            settings.color
        );

        if settings.follow_system_theme {
            apply_system_visuals(&cc.egui_ctx);
        }

        let picker = build_picker(&settings, settings.color)?;

        Ok(Self {
            settings_service,
            settings,
            picker,
            last_result: None,
        })
    }

    /// Rebuild the session after a settings change, keeping the current color.
    fn rebuild(&mut self) {
        match build_picker(&self.settings, self.picker.current_color()) {
            Ok(picker) => self.picker = picker,
            Err(err) => log::error!("Failed to rebuild picker: {}", err),
        }
    }

    fn switch_model(&mut self, model: ColorModel) {
        if model == self.picker.model() {
            return;
        }
        log::debug!("Switching picker model to {}", model);
        self.settings.model = model;
        self.rebuild();
    }

    fn set_button_bar(&mut self, show: bool) {
        self.settings.show_button_bar = show;
        self.rebuild();
    }

    fn remember(&mut self, color: Color) {
        self.settings.color = color;
        if let Err(err) = self.settings_service.save(&self.settings) {
            log::error!("Failed to save picker settings: {err:?}");
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        let mut model = self.picker.model();
        let mut show_button_bar = self.settings.show_button_bar;

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Model")
                .selected_text(model.name())
                .show_ui(ui, |ui| {
                    for option in ColorModel::ALL {
                        ui.selectable_value(&mut model, option, option.name());
                    }
                });
            ui.checkbox(&mut show_button_bar, "Button bar");
        });

        if model != self.picker.model() {
            self.switch_model(model);
        }
        if show_button_bar != self.settings.show_button_bar {
            self.set_button_bar(show_button_bar);
        }
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        let text = match self.last_result {
            Some(PickerAction::Confirm(color)) => format!("Confirmed {}", color),
            Some(PickerAction::PreviewClicked(color)) => format!("Picked {}", color),
            Some(PickerAction::Cancel) => "Cancelled".to_string(),
            Some(PickerAction::None) | None => return,
        };

        let color = match self.last_result {
            Some(PickerAction::Confirm(color)) | Some(PickerAction::PreviewClicked(color)) => {
                to_color32(color)
            }
            _ => ui.visuals().weak_text_color(),
        };

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(RichText::new(text).monospace());
        });
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_toolbar(ui);
            ui.separator();

            match render_color_picker(ui, &mut self.picker) {
                PickerAction::None => {}
                PickerAction::Confirm(color) => {
                    self.remember(color);
                    self.last_result = Some(PickerAction::Confirm(color));
                }
                PickerAction::PreviewClicked(color) => {
                    self.remember(color);
                    self.last_result = Some(PickerAction::PreviewClicked(color));
                }
                PickerAction::Cancel => {
                    self.last_result = Some(PickerAction::Cancel);
                }
            }

            ui.add_space(8.0);
            self.render_result(ui);
        });
    }
}

/// Start a session for `color`, falling back to the default color when the
/// model cannot represent it.
fn build_picker(
    settings: &PickerSettings,
    color: Color,
) -> Result<ColorPicker<PickerDisplay>, PickerError> {
    let model = settings.model;
    let mut picker = ColorPicker::new(color, model, PickerDisplay::for_model(model))
        .or_else(|err| {
            log::warn!("{}; starting from {}", err, DEFAULT_COLOR);
            ColorPicker::new(DEFAULT_COLOR, model, PickerDisplay::for_model(model))
        })?;

    if settings.show_button_bar {
        picker.enable_button_bar(Some(Box::new(ButtonBarCallbacks::new(
            |color: Color| log::debug!("button bar confirmed {}", color),
            || log::debug!("button bar cancelled"),
        ))));
    } else {
        picker.enable_preview_click(Box::new(|color: Color| {
            log::debug!("preview clicked with {}", color)
        }));
    }

    Ok(picker)
}

fn apply_system_visuals(ctx: &egui::Context) {
    let visuals = match dark_light::detect() {
        dark_light::Mode::Dark => egui::Visuals::dark(),
        dark_light::Mode::Light => egui::Visuals::light(),
        dark_light::Mode::Default => return,
    };
    log::debug!("Applying system theme (dark = {})", visuals.dark_mode);
    ctx.set_visuals(visuals);
}
