//! Reusable TUI widgets

mod input_field;
mod mode_indicator;
mod popup;

pub use input_field::InputField;
pub use mode_indicator::SessionMode;
pub use popup::Popup;
