//! Scoped field registration
//!
//! A [`Registration`] keeps a field registered with a form for as long as the
//! guard lives; dropping it unregisters the field, including on early return
//! or unwinding. [`AttachedField`] bundles a new field with its guard.

use super::field::FieldState;
use super::form_state::{FieldHandle, FormInner, FormState};
use std::ops::Deref;
use std::rc::{Rc, Weak};

/// Guard returned by [`FormState::attach`]
#[must_use = "dropping the registration unregisters the field immediately"]
#[derive(Debug)]
pub struct Registration {
    form: Weak<FormInner>,
    field: FieldHandle,
}

impl Registration {
    /// The form this registration belongs to, if it is still alive
    pub fn form(&self) -> Option<FormState> {
        self.form.upgrade().map(FormState::from_inner)
    }

    /// Unregister now instead of at scope end
    pub fn detach(self) {}
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(form) = self.form() {
            form.unregister_field(self.field.clone());
        }
    }
}

impl FormState {
    /// Register `field` until the returned guard is dropped.
    ///
    /// The guard holds the form weakly, so it never keeps a discarded form alive.
    /// Guards are not counted: attaching the same field twice still leaves one
    /// entry, and dropping either guard removes it.
    pub fn attach(&self, field: impl Into<FieldHandle>) -> Registration {
        let field = field.into();
        self.register_field(field.clone());
        Registration {
            form: Rc::downgrade(&self.inner),
            field,
        }
    }
}

/// A field that is registered with a form for its whole lifetime.
///
/// Without a form the field is standalone and behaves exactly like a plain
/// [`FieldState`].
#[derive(Debug)]
pub struct AttachedField<T> {
    field: FieldState<T>,
    registration: Option<Registration>,
}

impl<T: Clone + PartialEq + 'static> AttachedField<T> {
    pub fn new(initial: T, form: Option<&FormState>) -> Self {
        let field = FieldState::new(initial);
        let registration = form.map(|form| form.attach(&field));
        Self {
            field,
            registration,
        }
    }

    /// The underlying shared field handle
    pub fn state(&self) -> &FieldState<T> {
        &self.field
    }

    pub fn is_attached(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|r| r.form().is_some())
    }

    /// Unregister from the form but keep using the field
    pub fn into_inner(self) -> FieldState<T> {
        self.field
    }
}

impl<T> Deref for AttachedField<T> {
    type Target = FieldState<T>;

    fn deref(&self) -> &Self::Target {
        &self.field
    }
}
