//! Record types stored in the session document.

pub mod feedback;
pub mod goal;
pub mod interaction;
pub mod resource;
pub mod verbatim;

pub use feedback::{FeedbackRecord, RecommendationFeedback};
pub use goal::{COMPLETION_THRESHOLD, GoalEntry, GoalStatus, LearningGoal, ProgressTransition};
pub use interaction::InteractionRecord;
pub use resource::SavedResource;
pub use verbatim::Verbatim;
