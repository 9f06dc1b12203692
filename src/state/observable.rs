//! Observable storage cells
//!
//! Every piece of form state (field values, form mode, the registered field
//! list) lives in an [`Observable`] so a host UI can find out when it changed.
//! The host either subscribes a [`Listener`] or polls the write counters
//! exposed as `FieldState::version` and `FormState::version`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Callback invoked after an observed cell is written.
///
/// Cells only keep a weak reference, so the subscription ends when the host
/// drops its `Rc`.
pub type Listener = Rc<dyn Fn()>;

/// A single-threaded value cell that notifies listeners on write
pub struct Observable<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    listeners: RefCell<Vec<Weak<dyn Fn()>>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            version: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Read the value through a shared borrow
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value and notify listeners
    pub fn set(&self, value: T) {
        drop(self.value.replace(value));
        self.changed();
    }

    /// Mutate the value in place and notify listeners
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value.borrow_mut());
        self.changed();
        result
    }

    /// Number of writes since creation
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Register a listener for future writes
    pub fn subscribe(&self, listener: &Listener) {
        self.listeners.borrow_mut().push(Rc::downgrade(listener));
    }

    /// Number of listeners that are still alive
    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    fn changed(&self) {
        self.version.set(self.version.get().wrapping_add(1));

        // Snapshot first: a listener may subscribe again while being notified
        let live: Vec<Listener> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        for listener in live {
            listener();
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Clone the current value out of the cell
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.value.borrow())
            .field("version", &self.version.get())
            .finish()
    }
}
