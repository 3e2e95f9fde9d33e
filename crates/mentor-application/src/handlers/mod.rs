//! Operation handlers.
//!
//! Each handler method is one read-modify-write transaction against a
//! [`StateStore`](mentor_core::state::StateStore): re-read the collection,
//! compute a replacement, write it back whole, then append an audit record.
//! A method that returns `Err` has written nothing.

mod adaptive_learning;
mod content_curator;
mod feedback;
mod goal_setting;

pub use adaptive_learning::{
    AdaptiveLearningHandler, AdjustDifficultyRequest, AdjustPaceRequest, DifficultyAdjusted,
    PaceAdjusted,
};
pub use content_curator::{ContentCuratorHandler, ResourceSaved, SaveResourceRequest};
pub use feedback::{
    FeedbackHandler, FeedbackSubmitted, RelevanceUpdated, SubmitFeedbackRequest,
    UpdateRelevanceRequest,
};
pub use goal_setting::{
    AddGoalRequest, GoalAdded, GoalProgressUpdated, GoalSettingHandler, UpdateGoalProgressRequest,
};

use mentor_core::OperationResult;
use mentor_core::error::Result;
use serde::Serialize;

/// A successful handler outcome that can be rendered for the caller.
pub trait OperationOutcome: Serialize {
    fn message(&self) -> String;

    fn to_result(&self) -> Result<OperationResult> {
        OperationResult::from_outcome(self.message(), self)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::context::HandlerContext;
    use mentor_core::clock::FixedClock;
    use mentor_core::config::ProgressPolicy;
    use mentor_core::id::SequentialIdGenerator;
    use std::sync::Arc;

    pub const START: &str = "2024-03-05 09:00:00";

    pub fn context_with(policy: ProgressPolicy) -> (HandlerContext, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at(START).unwrap());
        let context = HandlerContext::new(
            clock.clone(),
            Arc::new(SequentialIdGenerator::new()),
            policy,
        );
        (context, clock)
    }

    pub fn context() -> (HandlerContext, Arc<FixedClock>) {
        context_with(ProgressPolicy::Accept)
    }
}
