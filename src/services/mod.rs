pub mod picker;
pub mod settings;
