//! Domain Services
//!
//! Pure functions over domain entities; no I/O.

mod catalog;
mod prompt_builder;

pub use catalog::*;
pub use prompt_builder::*;
