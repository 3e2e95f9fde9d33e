//! Learner feedback records.

use super::verbatim::Verbatim;
use serde::Serialize;

/// One entry of the append-only feedback list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRecord {
    pub id: String,
    /// course, resource, recommendation or general; stored as given
    #[serde(rename = "type")]
    pub feedback_type: Verbatim,
    pub content: Verbatim,
    /// 1-5 when supplied, 0 otherwise
    pub rating: Verbatim,
    pub item_id: Verbatim,
    pub timestamp: String,
}

/// Relevance rating for a single recommendation. Later ratings replace earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationFeedback {
    pub relevance_score: Verbatim,
    pub feedback_note: Verbatim,
    pub timestamp: String,
}
