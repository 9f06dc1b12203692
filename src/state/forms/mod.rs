//! Form domain layer
//!
//! [`FieldState`] tracks one value's committed baseline against its working
//! copy. [`FormState`] groups fields under a shared View/Edit mode and fans
//! commit/revert out to all of them.

mod field;
mod form_state;
mod registration;

pub use field::FieldState;
pub use form_state::{FieldHandle, FormMode, FormState, TrackedField};
pub use registration::{AttachedField, Registration};
