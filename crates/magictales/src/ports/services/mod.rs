//! Service Ports
//!
//! Abstract interfaces for external services.

mod narrator;
mod story_generator;

pub use narrator::*;
pub use story_generator::*;
