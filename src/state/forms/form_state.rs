//! Form mode and aggregate field operations

use super::field::FieldState;
use crate::state::observable::{Listener, Observable};
use std::fmt;
use std::rc::Rc;

/// The two modes a form can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMode {
    /// Read-only display
    #[default]
    View,
    /// Interactive editing
    Edit,
}

impl FormMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            FormMode::View => FormMode::Edit,
            FormMode::Edit => FormMode::View,
        }
    }

    pub fn is_edit(self) -> bool {
        self == FormMode::Edit
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::View => write!(f, "View"),
            FormMode::Edit => write!(f, "Edit"),
        }
    }
}

/// Operations a form fans out to its fields, independent of value type
#[cfg_attr(test, mockall::automock)]
pub trait TrackedField {
    /// Whether the field's working value differs from its baseline
    fn is_modified(&self) -> bool;

    /// Discard edits
    fn revert(&self);

    /// Accept edits
    fn commit(&self);
}

/// A registered field with its value type erased.
///
/// Equality is identity: two handles are equal when they refer to the same
/// field, regardless of the values held.
#[derive(Clone)]
pub struct FieldHandle(Rc<dyn TrackedField>);

impl FieldHandle {
    pub fn new(field: Rc<dyn TrackedField>) -> Self {
        Self(field)
    }

    /// Whether this handle refers to `field`
    pub fn is<T: Clone + PartialEq + 'static>(&self, field: &FieldState<T>) -> bool {
        self.addr() == field.addr()
    }

    pub fn ptr_eq(&self, other: &FieldHandle) -> bool {
        self.addr() == other.addr()
    }

    pub fn is_modified(&self) -> bool {
        self.0.is_modified()
    }

    pub fn revert(&self) {
        self.0.revert();
    }

    pub fn commit(&self) {
        self.0.commit();
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for FieldHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for FieldHandle {}

impl fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldHandle").field(&self.addr()).finish()
    }
}

/// Form-level state: the active [`FormMode`] plus the set of registered fields.
///
/// Like [`FieldState`], this is a shared handle; clones refer to the same form.
/// The form never owns its fields. Unregistering a field, or dropping the
/// form, leaves the field fully usable.
#[derive(Clone)]
pub struct FormState {
    pub(super) inner: Rc<FormInner>,
}

pub(super) struct FormInner {
    mode: Observable<FormMode>,
    fields: Observable<Vec<FieldHandle>>,
}

impl FormState {
    pub fn new(initial_mode: FormMode) -> Self {
        Self {
            inner: Rc::new(FormInner {
                mode: Observable::new(initial_mode),
                fields: Observable::new(Vec::new()),
            }),
        }
    }

    /// Current view/edit mode. Only [`toggle_mode`](Self::toggle_mode) changes it.
    pub fn mode(&self) -> FormMode {
        self.inner.mode.get()
    }

    /// Flip between View and Edit.
    ///
    /// Pending edits are left alone; commit or revert first if that matters.
    pub fn toggle_mode(&self) {
        let next = self.mode().toggled();
        tracing::debug!(mode = %next, "form mode toggled");
        self.inner.mode.set(next);
    }

    /// Track `field`. Registering the same field twice keeps one entry.
    pub fn register_field(&self, field: impl Into<FieldHandle>) {
        let field = field.into();
        if self.contains_handle(&field) {
            tracing::trace!("field already registered");
            return;
        }
        self.inner.fields.update(|fields| fields.push(field));
        tracing::debug!(count = self.len(), "field registered");
    }

    /// Stop tracking `field`. Unknown fields are ignored.
    pub fn unregister_field(&self, field: impl Into<FieldHandle>) {
        let field = field.into();
        if !self.contains_handle(&field) {
            tracing::trace!("unregister of unknown field ignored");
            return;
        }
        self.inner
            .fields
            .update(|fields| fields.retain(|f| !f.ptr_eq(&field)));
        tracing::debug!(count = self.len(), "field unregistered");
    }

    /// Registered fields in registration order.
    ///
    /// This is a snapshot; changing it does not change the form.
    pub fn fields(&self) -> Vec<FieldHandle> {
        self.inner.fields.get()
    }

    pub fn contains<T: Clone + PartialEq + 'static>(&self, field: &FieldState<T>) -> bool {
        self.inner
            .fields
            .with(|fields| fields.iter().any(|f| f.is(field)))
    }

    pub fn len(&self) -> usize {
        self.inner.fields.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when any registered field is modified; false for an empty form
    pub fn is_modified(&self) -> bool {
        self.inner
            .fields
            .with(|fields| fields.iter().any(FieldHandle::is_modified))
    }

    /// Revert every registered field, in registration order
    pub fn revert(&self) {
        let fields = self.fields();
        tracing::debug!(count = fields.len(), "reverting form");
        for field in &fields {
            field.revert();
        }
    }

    /// Commit every registered field, in registration order
    pub fn commit(&self) {
        let fields = self.fields();
        tracing::debug!(count = fields.len(), "committing form");
        for field in &fields {
            field.commit();
        }
    }

    /// Number of mode changes and registration changes so far.
    ///
    /// Field values have their own [`FieldState::version`].
    pub fn version(&self) -> u64 {
        self.inner
            .mode
            .version()
            .wrapping_add(self.inner.fields.version())
    }

    /// Notify `listener` when the mode or the registered set changes.
    ///
    /// Field value changes are observed through [`FieldState::subscribe`].
    pub fn subscribe(&self, listener: &Listener) {
        self.inner.mode.subscribe(listener);
        self.inner.fields.subscribe(listener);
    }

    pub(super) fn from_inner(inner: Rc<FormInner>) -> Self {
        Self { inner }
    }

    fn contains_handle(&self, field: &FieldHandle) -> bool {
        self.inner
            .fields
            .with(|fields| fields.iter().any(|f| f.ptr_eq(field)))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormMode::default())
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("mode", &self.mode())
            .field("fields", &self.len())
            .field("modified", &self.is_modified())
            .finish()
    }
}
