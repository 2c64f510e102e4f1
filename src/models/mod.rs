// Module exports for models

pub mod channel;
pub mod color;
pub mod color_model;
pub mod settings;
