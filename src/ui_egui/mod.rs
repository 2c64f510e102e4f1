mod app;
pub mod picker;

pub use app::PickerApp;
