//! View/edit content selection for a single field
//!
//! The form is passed in explicitly. Without one, a field always shows its
//! view content.

use crate::state::{FieldState, FormMode, FormState};

/// What a renderer should paint for a field in the current mode
#[derive(Debug)]
pub enum FieldContent<'a, T> {
    /// Read-only: just the current value
    View(T),
    /// Editable: the field itself, so the renderer can write to it
    Edit(&'a FieldState<T>),
}

impl<'a, T: Clone + PartialEq + 'static> FieldContent<'a, T> {
    /// Pick content from the enclosing form's mode
    pub fn select(field: &'a FieldState<T>, form: Option<&FormState>) -> Self {
        Self::for_mode(field, form.map(FormState::mode))
    }

    pub fn for_mode(field: &'a FieldState<T>, mode: Option<FormMode>) -> Self {
        match mode {
            Some(FormMode::Edit) => FieldContent::Edit(field),
            Some(FormMode::View) | None => FieldContent::View(field.current_value()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FieldContent::Edit(_))
    }
}

/// Run `view_content` or `edit_content` for `field` depending on the form mode
pub fn form_field<T, R>(
    field: &FieldState<T>,
    form: Option<&FormState>,
    view_content: impl FnOnce(T) -> R,
    edit_content: impl FnOnce(&FieldState<T>) -> R,
) -> R
where
    T: Clone + PartialEq + 'static,
{
    match FieldContent::select(field, form) {
        FieldContent::View(value) => view_content(value),
        FieldContent::Edit(field) => edit_content(field),
    }
}
