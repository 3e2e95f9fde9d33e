//! Learning goals: creation and progress tracking.

use super::OperationOutcome;
use crate::context::HandlerContext;
use crate::interaction_log::InteractionLog;
use mentor_core::config::ProgressPolicy;
use mentor_core::error::{MentorError, Result};
use mentor_core::id::GOAL_PREFIX;
use mentor_core::model::goal::{DEFAULT_GOAL_TYPE, reaches_completion};
use mentor_core::model::{
    COMPLETION_THRESHOLD, GoalEntry, InteractionRecord, LearningGoal, Verbatim,
};
use mentor_core::state::{Collection, CollectionAccess, StateStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddGoalRequest {
    pub title: Verbatim,
    pub description: Verbatim,
    pub target_date: Verbatim,
    #[serde(rename = "type")]
    pub goal_type: Verbatim,
    pub related_subjects: Value,
}

impl Default for AddGoalRequest {
    fn default() -> Self {
        Self {
            title: Verbatim::default(),
            description: Verbatim::default(),
            target_date: Verbatim::default(),
            goal_type: Verbatim::new(DEFAULT_GOAL_TYPE),
            related_subjects: Value::Array(Vec::new()),
        }
    }
}

impl AddGoalRequest {
    pub fn titled(title: impl Into<Value>) -> Self {
        Self {
            title: Verbatim::new(title),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateGoalProgressRequest {
    pub goal_id: Verbatim,
    /// Percentage; see [`ProgressPolicy`] for values outside 0-100
    pub progress: Verbatim,
    pub note: Option<Verbatim>,
}

impl Default for UpdateGoalProgressRequest {
    fn default() -> Self {
        Self {
            goal_id: Verbatim::default(),
            progress: Verbatim::new(0),
            note: None,
        }
    }
}

impl UpdateGoalProgressRequest {
    pub fn new(goal_id: impl Into<Value>, progress: impl Into<Value>) -> Self {
        Self {
            goal_id: Verbatim::new(goal_id),
            progress: Verbatim::new(progress),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<Value>) -> Self {
        self.note = Some(Verbatim::new(note));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalAdded {
    pub goal_id: String,
    pub timestamp: String,
    #[serde(skip)]
    pub title: Verbatim,
}

impl OperationOutcome for GoalAdded {
    fn message(&self) -> String {
        format!("Successfully added new learning goal: {}", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgressUpdated {
    pub goal_id: Verbatim,
    pub progress: Verbatim,
    /// The goal's status after the update, as stored
    pub status: Value,
    pub timestamp: String,
}

impl OperationOutcome for GoalProgressUpdated {
    fn message(&self) -> String {
        if reaches_completion(&self.progress) {
            "Congratulations! Goal marked as completed with 100% progress".to_string()
        } else {
            format!("Updated progress for goal to {}%", self.progress)
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoalSettingHandler {
    context: HandlerContext,
}

impl GoalSettingHandler {
    pub fn new(context: HandlerContext) -> Self {
        Self { context }
    }

    pub fn add_goal(&self, store: &mut dyn StateStore, request: AddGoalRequest) -> Result<GoalAdded> {
        let (now, timestamp) = self.context.stamp();
        let goal_id = self.context.next_id(GOAL_PREFIX, &now);

        let mut goal = LearningGoal::new(goal_id.clone(), request.title.clone(), timestamp.clone());
        goal.description = request.description;
        goal.target_date = request.target_date;
        goal.goal_type = request.goal_type;
        goal.related_subjects = request.related_subjects;

        let mut goals = store.read_sequence(Collection::LearningGoals);
        goals.push(serde_json::to_value(&goal)?);
        let audit = InteractionLog::prepare(&InteractionRecord::AddGoal {
            goal_id: goal_id.clone(),
            goal_title: request.title.clone(),
            timestamp: timestamp.clone(),
        })?;

        store.write_sequence(Collection::LearningGoals, goals);
        audit.commit(store);

        tracing::info!("[GoalSetting] Added goal {} ({})", goal_id, request.title);
        Ok(GoalAdded {
            goal_id,
            timestamp,
            title: request.title,
        })
    }

    /// Records progress on an existing goal.
    ///
    /// Fails with `NotFound` when no goal has the id, and with
    /// `InvalidArgument` when the progress policy rejects the value. Neither
    /// failure writes anything. The matched goal is edited in place, so keys
    /// other collaborators added survive the rewrite.
    pub fn update_goal_progress(
        &self,
        store: &mut dyn StateStore,
        request: UpdateGoalProgressRequest,
    ) -> Result<GoalProgressUpdated> {
        let progress = self.apply_policy(request.progress)?;

        let mut goals = store.read_sequence(Collection::LearningGoals);
        let matched = goals.iter_mut().find_map(|entry| match entry {
            Value::Object(fields)
                if fields
                    .get("id")
                    .is_some_and(|id| request.goal_id.matches(id)) =>
            {
                Some(fields)
            }
            _ => None,
        });
        let Some(fields) = matched else {
            tracing::warn!("[GoalSetting] Goal not found: {}", request.goal_id);
            return Err(MentorError::not_found("Goal", request.goal_id.to_string()));
        };

        let timestamp = self.context.timestamp();
        let mut goal = GoalEntry::new(fields);
        let transition = goal.record_progress(&progress, request.note.as_ref(), &timestamp);
        let status = goal.status();
        tracing::debug!(
            "[GoalSetting] Goal {} progress {} -> {:?}",
            request.goal_id,
            progress,
            transition
        );

        let audit = InteractionLog::prepare(&InteractionRecord::UpdateGoalProgress {
            goal_id: request.goal_id.clone(),
            new_progress: progress.clone(),
            timestamp: timestamp.clone(),
        })?;

        store.write_sequence(Collection::LearningGoals, goals);
        audit.commit(store);

        tracing::info!("[GoalSetting] Goal {} at {}%", request.goal_id, progress);
        Ok(GoalProgressUpdated {
            goal_id: request.goal_id,
            progress,
            status,
            timestamp,
        })
    }

    /// Non-numeric progress is left alone by `clamp` and refused by `reject`.
    fn apply_policy(&self, progress: Verbatim) -> Result<Verbatim> {
        match self.context.progress_policy() {
            ProgressPolicy::Accept => Ok(progress),
            ProgressPolicy::Clamp => Ok(clamp_progress(progress)),
            ProgressPolicy::Reject => {
                if progress
                    .as_f64()
                    .is_some_and(|p| (0.0..=COMPLETION_THRESHOLD).contains(&p))
                {
                    return Ok(progress);
                }
                tracing::warn!("[GoalSetting] Rejected progress value {}", progress);
                Err(MentorError::invalid_argument(
                    "progress",
                    format!("{} is outside 0-{}", progress, COMPLETION_THRESHOLD),
                ))
            }
        }
    }
}

/// Integers stay integers; fractional values stay fractional.
fn clamp_progress(progress: Verbatim) -> Verbatim {
    let max = COMPLETION_THRESHOLD;
    if let Some(whole) = progress.as_value().as_i64() {
        return Verbatim::new(whole.clamp(0, max as i64));
    }
    match progress.as_f64() {
        Some(value) => Verbatim::new(value.clamp(0.0, max)),
        None => progress,
    }
}
