//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the session repository and the hosted model providers.

mod capabilities;
mod session_service;
mod story_service;

pub use capabilities::{Capabilities, PersistenceMode};
pub use session_service::SessionService;
pub use story_service::{StoryOutcome, StoryService};

#[cfg(test)]
pub(crate) use story_service::test_support;
