//! Form state module

mod forms;
mod observable;

pub use forms::*;
pub use observable::*;
