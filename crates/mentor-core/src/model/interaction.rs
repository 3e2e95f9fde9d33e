//! Audit records appended to the interaction history.

use super::verbatim::Verbatim;
use serde::Serialize;

/// One entry of the interaction history, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InteractionRecord {
    AdjustDifficulty {
        course_id: Verbatim,
        new_difficulty: Verbatim,
        timestamp: String,
    },
    AdjustPace {
        course_id: Verbatim,
        new_pace: Verbatim,
        timestamp: String,
    },
    SaveResource {
        resource_id: Verbatim,
        resource_name: Verbatim,
        timestamp: String,
    },
    SubmitFeedback {
        feedback_id: String,
        feedback_type: Verbatim,
        timestamp: String,
    },
    UpdateRecommendationRelevance {
        recommendation_id: Verbatim,
        relevance_score: Verbatim,
        timestamp: String,
    },
    AddGoal {
        goal_id: String,
        goal_title: Verbatim,
        timestamp: String,
    },
    UpdateGoalProgress {
        goal_id: Verbatim,
        new_progress: Verbatim,
        timestamp: String,
    },
}

impl InteractionRecord {
    /// The `action` tag this record is stored under.
    pub fn action(&self) -> &'static str {
        match self {
            Self::AdjustDifficulty { .. } => "adjust_difficulty",
            Self::AdjustPace { .. } => "adjust_pace",
            Self::SaveResource { .. } => "save_resource",
            Self::SubmitFeedback { .. } => "submit_feedback",
            Self::UpdateRecommendationRelevance { .. } => "update_recommendation_relevance",
            Self::AddGoal { .. } => "add_goal",
            Self::UpdateGoalProgress { .. } => "update_goal_progress",
        }
    }
}
