// Chroma Picker demo
// Main entry point

use chroma_picker::ui_egui::PickerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Chroma Picker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chroma Picker")
            .with_inner_size([360.0, 420.0])
            .with_min_inner_size([300.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chroma Picker",
        options,
        Box::new(|cc| Ok(Box::new(PickerApp::new(cc)?))),
    )
}
