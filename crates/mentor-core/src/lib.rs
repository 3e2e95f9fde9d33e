//! Domain layer for Mentor.
//!
//! Holds the session document and its get/set contract, the record types
//! stored in each collection, the goal state machine, and the clock and
//! id-generation capabilities handlers are built from.

pub mod clock;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod operation;
pub mod session;
pub mod state;

// Re-export common types
pub use error::{MentorError, Result};
pub use operation::{OperationResult, OperationStatus};
