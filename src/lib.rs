//! Switchkraft - forms that switch between View and Edit modes
//!
//! [`FieldState`] holds a committed baseline and a working value for one
//! field; [`FormState`] groups fields under a shared [`FormMode`] and commits
//! or reverts them together. Every value lives in an [`Observable`] cell so a
//! UI can redraw when something changes.
//!
//! ```
//! use switchkraft::{AttachedField, FormMode, FormState};
//!
//! let form = FormState::default();
//! let name = AttachedField::new(String::from("Alice"), Some(&form));
//!
//! form.toggle_mode();
//! assert_eq!(form.mode(), FormMode::Edit);
//!
//! name.set_current(String::from("Bob"));
//! assert!(form.is_modified());
//!
//! form.commit();
//! assert_eq!(name.original_value(), "Bob");
//! ```

pub mod state;
pub mod ui;

pub use state::{
    AttachedField, FieldHandle, FieldState, FormMode, FormState, Listener, Observable,
    Registration, TrackedField,
};
