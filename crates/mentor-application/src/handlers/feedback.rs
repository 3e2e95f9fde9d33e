//! Learner feedback and recommendation relevance ratings.

use super::OperationOutcome;
use crate::context::HandlerContext;
use crate::interaction_log::InteractionLog;
use mentor_core::error::Result;
use mentor_core::id::FEEDBACK_PREFIX;
use mentor_core::model::{FeedbackRecord, InteractionRecord, RecommendationFeedback, Verbatim};
use mentor_core::state::{Collection, CollectionAccess, StateStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitFeedbackRequest {
    #[serde(rename = "type")]
    pub feedback_type: Verbatim,
    pub content: Verbatim,
    pub rating: Verbatim,
    pub item_id: Verbatim,
}

impl Default for SubmitFeedbackRequest {
    fn default() -> Self {
        Self {
            feedback_type: Verbatim::default(),
            content: Verbatim::default(),
            rating: Verbatim::new(0),
            item_id: Verbatim::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRelevanceRequest {
    pub recommendation_id: Verbatim,
    pub relevance_score: Verbatim,
    pub feedback_note: Verbatim,
}

impl Default for UpdateRelevanceRequest {
    fn default() -> Self {
        Self {
            recommendation_id: Verbatim::default(),
            relevance_score: Verbatim::new(0),
            feedback_note: Verbatim::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmitted {
    pub feedback_id: String,
    pub timestamp: String,
}

impl OperationOutcome for FeedbackSubmitted {
    fn message(&self) -> String {
        "Successfully recorded your feedback".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelevanceUpdated {
    pub recommendation_id: Verbatim,
    pub relevance_score: Verbatim,
    pub timestamp: String,
}

impl OperationOutcome for RelevanceUpdated {
    fn message(&self) -> String {
        "Thank you for rating this recommendation".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackHandler {
    context: HandlerContext,
}

impl FeedbackHandler {
    pub fn new(context: HandlerContext) -> Self {
        Self { context }
    }

    /// Appends a feedback record. Never deduplicates.
    pub fn submit_feedback(
        &self,
        store: &mut dyn StateStore,
        request: SubmitFeedbackRequest,
    ) -> Result<FeedbackSubmitted> {
        let (now, timestamp) = self.context.stamp();
        let feedback_id = self.context.next_id(FEEDBACK_PREFIX, &now);

        let record = FeedbackRecord {
            id: feedback_id.clone(),
            feedback_type: request.feedback_type.clone(),
            content: request.content,
            rating: request.rating,
            item_id: request.item_id,
            timestamp: timestamp.clone(),
        };
        let mut feedback = store.read_sequence(Collection::FeedbackList);
        feedback.push(serde_json::to_value(&record)?);
        let audit = InteractionLog::prepare(&InteractionRecord::SubmitFeedback {
            feedback_id: feedback_id.clone(),
            feedback_type: request.feedback_type,
            timestamp: timestamp.clone(),
        })?;

        store.write_sequence(Collection::FeedbackList, feedback);
        audit.commit(store);

        tracing::info!("[Feedback] Recorded feedback {}", feedback_id);
        Ok(FeedbackSubmitted {
            feedback_id,
            timestamp,
        })
    }

    /// Sets the relevance rating for one recommendation, replacing any earlier one.
    pub fn update_recommendation_relevance(
        &self,
        store: &mut dyn StateStore,
        request: UpdateRelevanceRequest,
    ) -> Result<RelevanceUpdated> {
        let timestamp = self.context.timestamp();

        let entry = RecommendationFeedback {
            relevance_score: request.relevance_score.clone(),
            feedback_note: request.feedback_note,
            timestamp: timestamp.clone(),
        };
        let mut ratings = store.read_map(Collection::RecommendationFeedback);
        ratings.insert(
            request.recommendation_id.to_string(),
            serde_json::to_value(&entry)?,
        );
        let audit = InteractionLog::prepare(&InteractionRecord::UpdateRecommendationRelevance {
            recommendation_id: request.recommendation_id.clone(),
            relevance_score: request.relevance_score.clone(),
            timestamp: timestamp.clone(),
        })?;

        store.write_map(Collection::RecommendationFeedback, ratings);
        audit.commit(store);

        tracing::info!(
            "[Feedback] Recommendation {} rated {}",
            request.recommendation_id,
            request.relevance_score
        );
        Ok(RelevanceUpdated {
            recommendation_id: request.recommendation_id,
            relevance_score: request.relevance_score,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support;
    use mentor_core::state::SessionDocument;
    use serde_json::json;

    fn course_feedback(content: &str, rating: i64) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            feedback_type: Verbatim::new("course"),
            content: Verbatim::new(content),
            rating: Verbatim::new(rating),
            item_id: Verbatim::new("python_intro"),
        }
    }

    #[test]
    fn test_feedback_is_append_only() {
        let (context, _clock) = test_support::context();
        let handler = FeedbackHandler::new(context);
        let mut doc = SessionDocument::new();

        let first = handler
            .submit_feedback(&mut doc, course_feedback("Great pacing", 5))
            .unwrap();
        let after_first = doc.read_sequence(Collection::FeedbackList);

        // Same content again in the same second is still a new entry
        let second = handler
            .submit_feedback(&mut doc, course_feedback("Great pacing", 5))
            .unwrap();
        assert_ne!(first.feedback_id, second.feedback_id);

        let feedback = doc.read_sequence(Collection::FeedbackList);
        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback[0], after_first[0]);
        assert_eq!(feedback[1]["id"], json!(second.feedback_id));
        assert_eq!(doc.read_sequence(Collection::InteractionHistory).len(), 2);
    }

    #[test]
    fn test_feedback_id_comes_from_timestamp() {
        let (context, _clock) = test_support::context();
        let handler = FeedbackHandler::new(context);
        let mut doc = SessionDocument::new();

        let outcome = handler
            .submit_feedback(&mut doc, SubmitFeedbackRequest::default())
            .unwrap();

        assert!(outcome.feedback_id.starts_with("feedback_2024_03_05_09_00_00"));
        let stored = &doc.read_sequence(Collection::FeedbackList)[0];
        assert_eq!(stored["rating"], json!(0));
        assert_eq!(stored["item_id"], json!(""));
    }

    #[test]
    fn test_relevance_overwrites_per_recommendation() {
        let (context, clock) = test_support::context();
        let handler = FeedbackHandler::new(context);
        let mut doc = SessionDocument::new();

        handler
            .update_recommendation_relevance(
                &mut doc,
                UpdateRelevanceRequest {
                    recommendation_id: Verbatim::new("rec_ml"),
                    relevance_score: Verbatim::new(2),
                    feedback_note: Verbatim::new("too advanced"),
                },
            )
            .unwrap();
        clock.advance(chrono::Duration::minutes(5));
        let outcome = handler
            .update_recommendation_relevance(
                &mut doc,
                UpdateRelevanceRequest {
                    recommendation_id: Verbatim::new("rec_ml"),
                    relevance_score: Verbatim::new(4.5),
                    ..UpdateRelevanceRequest::default()
                },
            )
            .unwrap();

        assert_eq!(outcome.message(), "Thank you for rating this recommendation");
        let ratings = doc.read_map(Collection::RecommendationFeedback);
        assert_eq!(ratings.len(), 1);
        assert_eq!(
            ratings["rec_ml"],
            json!({
                "relevance_score": 4.5,
                "feedback_note": "",
                "timestamp": "2024-03-05 09:05:00"
            })
        );

        let history = doc.read_sequence(Collection::InteractionHistory);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["relevance_score"], json!(2));
    }

    #[test]
    fn test_fractional_rating_is_stored_verbatim() {
        let (context, _clock) = test_support::context();
        let handler = FeedbackHandler::new(context);
        let mut doc = SessionDocument::new();

        let request: SubmitFeedbackRequest =
            serde_json::from_value(json!({"type": "course", "content": "ok", "rating": 4.5}))
                .unwrap();
        handler.submit_feedback(&mut doc, request).unwrap();

        let stored = &doc.read_sequence(Collection::FeedbackList)[0];
        assert_eq!(stored["rating"], json!(4.5));
        assert_eq!(stored["type"], json!("course"));
    }
}
