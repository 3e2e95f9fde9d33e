//! Session summaries for analysis collaborators.
//!
//! Built from a snapshot, never from a live lock, so reporting cannot hold up
//! operations.

use mentor_core::model::GoalStatus;
use mentor_core::state::{Collection, CollectionAccess, SessionDocument};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub session_id: String,
    pub total_interactions: usize,
    pub interactions_by_action: BTreeMap<String, usize>,
    pub last_interaction_at: Option<String>,
    pub saved_resources: usize,
    pub feedback_count: usize,
    /// Mean of numeric ratings above zero; unrated feedback is ignored
    pub average_rating: Option<f64>,
    pub rated_recommendations: usize,
    pub active_goals: usize,
    pub completed_goals: usize,
    pub average_goal_progress: Option<f64>,
    pub difficulty_preferences: usize,
    pub pace_preferences: usize,
}

impl SessionReport {
    pub fn from_document(session_id: impl Into<String>, document: &SessionDocument) -> Self {
        let history = document.read_sequence(Collection::InteractionHistory);
        let mut interactions_by_action = BTreeMap::new();
        for entry in &history {
            if let Some(action) = entry.get("action").and_then(Value::as_str) {
                *interactions_by_action.entry(action.to_string()).or_insert(0) += 1;
            }
        }
        let last_interaction_at = history
            .last()
            .and_then(|entry| entry.get("timestamp"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let feedback = document.read_sequence(Collection::FeedbackList);
        let ratings: Vec<f64> = feedback
            .iter()
            .filter_map(|entry| entry.get("rating").and_then(Value::as_f64))
            .filter(|rating| *rating > 0.0)
            .collect();

        let goals: Vec<Value> = document
            .read_sequence(Collection::LearningGoals)
            .into_iter()
            .filter(Value::is_object)
            .collect();
        let completed_goals = goals
            .iter()
            .filter(|goal| {
                goal.get("status").and_then(Value::as_str) == Some(GoalStatus::Completed.as_ref())
            })
            .count();

        Self {
            session_id: session_id.into(),
            total_interactions: history.len(),
            interactions_by_action,
            last_interaction_at,
            saved_resources: document.read_sequence(Collection::SavedResources).len(),
            feedback_count: feedback.len(),
            average_rating: mean(ratings.into_iter()),
            rated_recommendations: document.read_map(Collection::RecommendationFeedback).len(),
            active_goals: goals.len() - completed_goals,
            completed_goals,
            average_goal_progress: mean(
                goals
                    .iter()
                    .filter_map(|goal| goal.get("progress").and_then(Value::as_f64)),
            ),
            difficulty_preferences: document.read_map(Collection::DifficultyPreferences).len(),
            pace_preferences: document.read_map(Collection::PacePreferences).len(),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
