//! Difficulty and pace preferences.

use super::OperationOutcome;
use crate::context::HandlerContext;
use crate::interaction_log::InteractionLog;
use mentor_core::error::Result;
use mentor_core::model::{InteractionRecord, Verbatim};
use mentor_core::state::{Collection, CollectionAccess, StateStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustDifficultyRequest {
    pub course_id: Verbatim,
    /// easier, harder or current; stored as given
    pub difficulty: Verbatim,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustPaceRequest {
    pub course_id: Verbatim,
    /// slower, faster or current; stored as given
    pub pace: Verbatim,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyAdjusted {
    pub course_id: Verbatim,
    pub difficulty: Verbatim,
    pub timestamp: String,
}

impl OperationOutcome for DifficultyAdjusted {
    fn message(&self) -> String {
        format!(
            "Successfully adjusted difficulty for course {} to {}",
            self.course_id, self.difficulty
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceAdjusted {
    pub course_id: Verbatim,
    pub pace: Verbatim,
    pub timestamp: String,
}

impl OperationOutcome for PaceAdjusted {
    fn message(&self) -> String {
        format!(
            "Successfully adjusted learning pace for course {} to {}",
            self.course_id, self.pace
        )
    }
}

/// Per-course difficulty and pace preferences. Both operations always succeed.
#[derive(Debug, Clone)]
pub struct AdaptiveLearningHandler {
    context: HandlerContext,
}

impl AdaptiveLearningHandler {
    pub fn new(context: HandlerContext) -> Self {
        Self { context }
    }

    pub fn adjust_difficulty(
        &self,
        store: &mut dyn StateStore,
        request: AdjustDifficultyRequest,
    ) -> Result<DifficultyAdjusted> {
        let timestamp = self.context.timestamp();
        let audit = InteractionLog::prepare(&InteractionRecord::AdjustDifficulty {
            course_id: request.course_id.clone(),
            new_difficulty: request.difficulty.clone(),
            timestamp: timestamp.clone(),
        })?;

        upsert_preference(
            store,
            Collection::DifficultyPreferences,
            &request.course_id,
            &request.difficulty,
        );
        audit.commit(store);

        tracing::info!(
            "[AdaptiveLearning] Difficulty for {} set to {}",
            request.course_id,
            request.difficulty
        );
        Ok(DifficultyAdjusted {
            course_id: request.course_id,
            difficulty: request.difficulty,
            timestamp,
        })
    }

    pub fn adjust_pace(
        &self,
        store: &mut dyn StateStore,
        request: AdjustPaceRequest,
    ) -> Result<PaceAdjusted> {
        let timestamp = self.context.timestamp();
        let audit = InteractionLog::prepare(&InteractionRecord::AdjustPace {
            course_id: request.course_id.clone(),
            new_pace: request.pace.clone(),
            timestamp: timestamp.clone(),
        })?;

        upsert_preference(
            store,
            Collection::PacePreferences,
            &request.course_id,
            &request.pace,
        );
        audit.commit(store);

        tracing::info!(
            "[AdaptiveLearning] Pace for {} set to {}",
            request.course_id,
            request.pace
        );
        Ok(PaceAdjusted {
            course_id: request.course_id,
            pace: request.pace,
            timestamp,
        })
    }
}

/// Keys are the course id's text form, so a numeric id `101` lands under `"101"`.
fn upsert_preference(
    store: &mut dyn StateStore,
    collection: Collection,
    course_id: &Verbatim,
    tag: &Verbatim,
) {
    let mut preferences = store.read_map(collection);
    preferences.insert(course_id.to_string(), tag.as_value().clone());
    store.write_map(collection, preferences);
}
