//! Per-field dirty tracking

use super::form_state::{FieldHandle, TrackedField};
use crate::state::observable::{Listener, Observable};
use std::fmt;
use std::rc::Rc;

/// Tracks a committed baseline and a working value for one form field.
///
/// `FieldState` is a shared handle: clones point at the same field, which is
/// also how a [`FormState`](super::FormState) tells registered fields apart.
/// A field works on its own without ever being registered with a form.
pub struct FieldState<T> {
    cells: Rc<FieldCells<T>>,
}

struct FieldCells<T> {
    original: Observable<T>,
    current: Observable<T>,
}

impl<T: Clone + PartialEq + 'static> FieldState<T> {
    /// Create a clean field; both baseline and working value start at `initial`
    pub fn new(initial: T) -> Self {
        Self {
            cells: Rc::new(FieldCells {
                original: Observable::new(initial.clone()),
                current: Observable::new(initial),
            }),
        }
    }

    /// The last committed value
    pub fn original_value(&self) -> T {
        self.cells.original.get()
    }

    /// The value being edited
    pub fn current_value(&self) -> T {
        self.cells.current.get()
    }

    /// Borrow the value being edited without cloning it
    pub fn with_current<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cells.current.with(f)
    }

    /// Overwrite the working value, e.g. on each keystroke
    pub fn set_current(&self, value: T) {
        self.cells.current.set(value);
    }

    /// Edit a copy of the working value, then store it.
    ///
    /// The field stays readable inside `f` and still shows the old value there.
    pub fn update_current<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.current_value();
        let result = f(&mut value);
        self.set_current(value);
        result
    }

    /// True when the working value differs from the baseline
    pub fn is_modified(&self) -> bool {
        self.cells.is_modified()
    }

    /// Discard edits, restoring the baseline
    pub fn revert(&self) {
        self.cells.revert();
    }

    /// Accept edits, making the working value the new baseline
    pub fn commit(&self) {
        self.cells.commit();
    }

    /// Number of writes to the baseline or working value so far.
    ///
    /// A host without listeners can compare this between frames.
    pub fn version(&self) -> u64 {
        self.cells
            .original
            .version()
            .wrapping_add(self.cells.current.version())
    }

    /// Notify `listener` whenever the baseline or working value is written
    pub fn subscribe(&self, listener: &Listener) {
        self.cells.original.subscribe(listener);
        self.cells.current.subscribe(listener);
    }

    /// Type-erased handle used for form registration
    pub fn handle(&self) -> FieldHandle {
        let tracked: Rc<dyn TrackedField> = self.cells.clone();
        FieldHandle::new(tracked)
    }

    /// Whether both handles point at the same field
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.cells) as *const ()
    }
}

impl<T: Clone + PartialEq> TrackedField for FieldCells<T> {
    fn is_modified(&self) -> bool {
        self.current
            .with(|current| self.original.with(|original| current != original))
    }

    fn revert(&self) {
        let original = self.original.get();
        self.current.set(original);
    }

    fn commit(&self) {
        let current = self.current.get();
        self.original.set(current);
    }
}

impl<T> Clone for FieldState<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T: Clone + PartialEq + 'static> From<&FieldState<T>> for FieldHandle {
    fn from(field: &FieldState<T>) -> Self {
        field.handle()
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("original", &self.cells.original)
            .field("current", &self.cells.current)
            .finish()
    }
}
