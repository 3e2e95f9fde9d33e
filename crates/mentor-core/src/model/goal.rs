//! Learning goal records and their completion state machine.
//!
//! A goal starts `active` and becomes `completed` the first time its progress
//! reaches [`COMPLETION_THRESHOLD`]. Nothing moves it back.

use super::verbatim::Verbatim;
use serde::Serialize;
use serde_json::{Map, Value, json};
use strum::{AsRefStr, Display, EnumString};

/// Progress at which a goal is complete. Larger values count as complete too.
pub const COMPLETION_THRESHOLD: f64 = 100.0;

pub const DEFAULT_GOAL_TYPE: &str = "knowledge";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
}

/// What a progress update did to the goal's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTransition {
    /// Still active
    InProgress,
    /// Crossed the threshold with this update
    Completed,
    /// Was already completed before this update
    AlreadyCompleted,
}

/// Whether a progress value completes a goal. Non-numeric values never do.
pub fn reaches_completion(progress: &Verbatim) -> bool {
    progress
        .as_f64()
        .is_some_and(|p| p >= COMPLETION_THRESHOLD)
}

/// A newly created goal as first written to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningGoal {
    pub id: String,
    pub title: Verbatim,
    pub description: Verbatim,
    /// knowledge, skill or project; stored as given
    #[serde(rename = "type")]
    pub goal_type: Verbatim,
    pub status: GoalStatus,
    pub progress: i64,
    pub created_date: String,
    pub target_date: Verbatim,
    pub related_subjects: Value,
    pub progress_notes: Vec<Value>,
}

impl LearningGoal {
    /// A fresh active goal with no progress.
    pub fn new(id: impl Into<String>, title: Verbatim, created_date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title,
            description: Verbatim::default(),
            goal_type: Verbatim::new(DEFAULT_GOAL_TYPE),
            status: GoalStatus::Active,
            progress: 0,
            created_date: created_date.into(),
            target_date: Verbatim::default(),
            related_subjects: Value::Array(Vec::new()),
            progress_notes: Vec::new(),
        }
    }

    /// Id of a stored goal entry, whatever its JSON type.
    pub fn stored_id(entry: &Value) -> Option<&Value> {
        entry.as_object()?.get("id")
    }
}

/// A stored goal, edited in place.
///
/// Only `progress`, `status`, `completion_date` and `progress_notes` are
/// touched; every other key, including ones this crate does not know about,
/// is left exactly as it was.
pub struct GoalEntry<'a> {
    fields: &'a mut Map<String, Value>,
}

impl<'a> GoalEntry<'a> {
    pub fn new(fields: &'a mut Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn status(&self) -> Value {
        self.fields.get("status").cloned().unwrap_or(Value::Null)
    }

    pub fn is_completed(&self) -> bool {
        self.fields.get("status").and_then(Value::as_str) == Some(GoalStatus::Completed.as_ref())
    }

    /// Applies a progress update stamped `at`.
    ///
    /// The completion date is set only on the update that completes the goal.
    /// A blank note is not recorded.
    pub fn record_progress(
        &mut self,
        progress: &Verbatim,
        note: Option<&Verbatim>,
        at: &str,
    ) -> ProgressTransition {
        self.fields
            .insert("progress".to_string(), progress.as_value().clone());

        let transition = if self.is_completed() {
            ProgressTransition::AlreadyCompleted
        } else if reaches_completion(progress) {
            self.fields.insert(
                "status".to_string(),
                Value::String(GoalStatus::Completed.to_string()),
            );
            self.fields
                .insert("completion_date".to_string(), Value::String(at.to_string()));
            ProgressTransition::Completed
        } else {
            ProgressTransition::InProgress
        };

        if let Some(note) = note.filter(|n| !n.is_blank()) {
            let entry = json!({
                "note": note.as_value(),
                "timestamp": at,
                "progress": progress.as_value(),
            });
            match self.fields.get_mut("progress_notes") {
                Some(Value::Array(notes)) => notes.push(entry),
                Some(other) => {
                    tracing::warn!("Goal progress_notes is not a list ({}), restarting it", other);
                    *other = Value::Array(vec![entry]);
                }
                None => {
                    self.fields
                        .insert("progress_notes".to_string(), Value::Array(vec![entry]));
                }
            }
        }

        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_goal() -> Map<String, Value> {
        let goal = LearningGoal::new("goal_1", Verbatim::new("Learn recursion"), "2024-03-05 09:00:00");
        match serde_json::to_value(&goal).unwrap() {
            Value::Object(fields) => fields,
            other => panic!("goal serialized as {}", other),
        }
    }

    #[test]
    fn test_new_goal_shape() {
        let goal = Value::Object(stored_goal());
        assert_eq!(goal["status"], json!("active"));
        assert_eq!(goal["progress"], json!(0));
        assert_eq!(goal["type"], json!("knowledge"));
        assert_eq!(goal["progress_notes"], json!([]));
        assert_eq!(goal["related_subjects"], json!([]));
        assert!(goal.get("completion_date").is_none());
    }

    #[test]
    fn test_partial_progress_with_note() {
        let mut fields = stored_goal();
        let mut goal = GoalEntry::new(&mut fields);
        let transition = goal.record_progress(
            &Verbatim::new(50),
            Some(&Verbatim::new("halfway")),
            "2024-03-05 10:00:00",
        );

        assert_eq!(transition, ProgressTransition::InProgress);
        assert_eq!(goal.status(), json!("active"));
        assert_eq!(
            fields["progress_notes"],
            json!([{"note": "halfway", "timestamp": "2024-03-05 10:00:00", "progress": 50}])
        );
    }

    #[test]
    fn test_completion_stamps_once() {
        let mut fields = stored_goal();
        let mut goal = GoalEntry::new(&mut fields);
        assert_eq!(
            goal.record_progress(&Verbatim::new(100), None, "2024-03-05 10:00:00"),
            ProgressTransition::Completed
        );
        assert_eq!(
            goal.record_progress(&Verbatim::new(120), None, "2024-03-06 10:00:00"),
            ProgressTransition::AlreadyCompleted
        );
        assert_eq!(fields["completion_date"], json!("2024-03-05 10:00:00"));
        assert_eq!(fields["progress"], json!(120));
    }

    #[test]
    fn test_completed_goal_never_reopens() {
        let mut fields = stored_goal();
        let mut goal = GoalEntry::new(&mut fields);
        goal.record_progress(&Verbatim::new(100), None, "2024-03-05 10:00:00");
        goal.record_progress(&Verbatim::new(40), Some(&Verbatim::new("revisiting")), "2024-03-06 10:00:00");

        assert!(goal.is_completed());
        assert_eq!(fields["progress"], json!(40));
    }

    #[test]
    fn test_blank_note_is_skipped() {
        let mut fields = stored_goal();
        GoalEntry::new(&mut fields).record_progress(
            &Verbatim::new(10),
            Some(&Verbatim::default()),
            "2024-03-05 10:00:00",
        );
        assert_eq!(fields["progress_notes"], json!([]));
    }

    #[test]
    fn test_foreign_fields_pass_through() {
        let mut fields = match json!({
            "id": "g1",
            "progress": 40.5,
            "status": "paused",
            "mentor_rating": 4
        }) {
            Value::Object(fields) => fields,
            _ => unreachable!(),
        };

        let transition = GoalEntry::new(&mut fields).record_progress(
            &Verbatim::new(60.25),
            Some(&Verbatim::new("first page")),
            "2024-03-06 09:00:00",
        );

        assert_eq!(transition, ProgressTransition::InProgress);
        assert_eq!(fields["status"], json!("paused"));
        assert_eq!(fields["progress"], json!(60.25));
        assert_eq!(fields["mentor_rating"], json!(4));
        assert_eq!(fields["progress_notes"][0]["note"], json!("first page"));
        assert!(fields.get("completion_date").is_none());
    }

    #[test]
    fn test_completion_needs_a_number() {
        assert!(reaches_completion(&Verbatim::new(100)));
        assert!(reaches_completion(&Verbatim::new(100.0)));
        assert!(!reaches_completion(&Verbatim::new(99.9)));
        assert!(!reaches_completion(&Verbatim::new("100")));
    }
}
