//! Application layer for Mentor.
//!
//! Operation handlers implement each read-modify-write transaction against a
//! session document; the dispatcher and `LearningAssistant` expose them to
//! callers by name.

pub mod context;
pub mod dispatcher;
pub mod handlers;
pub mod interaction_log;
pub mod learning_assistant;
pub mod report;

pub use context::HandlerContext;
pub use dispatcher::{Operation, OperationDispatcher};
pub use learning_assistant::LearningAssistant;
pub use report::SessionReport;
