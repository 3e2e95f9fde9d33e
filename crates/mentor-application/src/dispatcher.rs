//! Named-operation dispatch.
//!
//! Callers name an operation and pass its arguments as a JSON object, the way
//! a tool-calling front end does. The dispatcher decodes the arguments, holds
//! the session lock for the whole invocation and renders the outcome.

use crate::context::HandlerContext;
use crate::handlers::{
    AdaptiveLearningHandler, ContentCuratorHandler, FeedbackHandler, GoalSettingHandler,
    OperationOutcome,
};
use mentor_core::OperationResult;
use mentor_core::error::{MentorError, Result};
use mentor_core::state::{SessionStore, StateStore};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Operations callers can invoke by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    AdjustContentDifficulty,
    AdjustLearningPace,
    AddResourceToSaved,
    SubmitFeedback,
    UpdateRecommendationRelevance,
    AddLearningGoal,
    UpdateGoalProgress,
}

impl Operation {
    pub fn all() -> Vec<Operation> {
        Operation::iter().collect()
    }
}

pub struct OperationDispatcher {
    context: HandlerContext,
    adaptive_learning: AdaptiveLearningHandler,
    content_curator: ContentCuratorHandler,
    feedback: FeedbackHandler,
    goal_setting: GoalSettingHandler,
}

impl OperationDispatcher {
    pub fn new(context: HandlerContext) -> Self {
        Self {
            adaptive_learning: AdaptiveLearningHandler::new(context.clone()),
            content_curator: ContentCuratorHandler::new(context.clone()),
            feedback: FeedbackHandler::new(context.clone()),
            goal_setting: GoalSettingHandler::new(context.clone()),
            context,
        }
    }

    pub fn context(&self) -> &HandlerContext {
        &self.context
    }

    /// Runs one operation against a store the caller already holds exclusively.
    pub fn execute(
        &self,
        store: &mut dyn StateStore,
        operation: Operation,
        args: Value,
    ) -> Result<OperationResult> {
        tracing::debug!("[OperationDispatcher] Executing {}", operation);
        match operation {
            Operation::AdjustContentDifficulty => self
                .adaptive_learning
                .adjust_difficulty(store, decode_args(args)?)?
                .to_result(),
            Operation::AdjustLearningPace => self
                .adaptive_learning
                .adjust_pace(store, decode_args(args)?)?
                .to_result(),
            Operation::AddResourceToSaved => self
                .content_curator
                .save_resource(store, decode_args(args)?)?
                .to_result(),
            Operation::SubmitFeedback => self
                .feedback
                .submit_feedback(store, decode_args(args)?)?
                .to_result(),
            Operation::UpdateRecommendationRelevance => self
                .feedback
                .update_recommendation_relevance(store, decode_args(args)?)?
                .to_result(),
            Operation::AddLearningGoal => self
                .goal_setting
                .add_goal(store, decode_args(args)?)?
                .to_result(),
            Operation::UpdateGoalProgress => self
                .goal_setting
                .update_goal_progress(store, decode_args(args)?)?
                .to_result(),
        }
    }

    /// Resolves `name`, locks the session and runs the operation.
    ///
    /// Every failure, documented or not, comes back as an `error` result.
    pub async fn dispatch(&self, session: &SessionStore, name: &str, args: Value) -> OperationResult {
        let outcome = match Operation::from_str(name) {
            Ok(operation) => {
                let mut document = session.lock().await;
                self.execute(&mut *document, operation, args)
            }
            Err(_) => Err(MentorError::UnknownOperation(name.to_string())),
        };

        match outcome {
            Ok(result) => result,
            Err(err) => {
                if err.is_operation_failure() {
                    tracing::info!(
                        "[OperationDispatcher] {} failed in session {}: {}",
                        name,
                        session.id(),
                        err
                    );
                } else {
                    tracing::warn!(
                        "[OperationDispatcher] {} errored in session {}: {}",
                        name,
                        session.id(),
                        err
                    );
                }
                OperationResult::error(err.to_string(), self.context.timestamp())
            }
        }
    }
}

/// Missing or `null` arguments decode as an empty object, so every optional
/// argument takes its default. Argument values of any JSON type are accepted
/// and stored as given; only a non-object argument list is refused.
fn decode_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    let args = match args {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(MentorError::invalid_argument(
                "args",
                format!("expected an object, got {}", other),
            ));
        }
    };
    serde_json::from_value(Value::Object(args))
        .map_err(|e| MentorError::invalid_argument("args", e.to_string()))
}
