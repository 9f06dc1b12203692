//! Rendering helpers for view/edit forms

mod button;
mod form_field;
mod text_field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use form_field::{form_field, FieldContent};
pub use text_field::{draw_text_field, MODIFIED_MARKER, TEXT_FIELD_HEIGHT};
