//! Reusable UI components.

mod input_field;
mod popup;

pub use input_field::InputField;
pub use popup::Popup;
