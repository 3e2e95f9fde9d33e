//! Use case tying sessions to operation dispatch.

use crate::context::HandlerContext;
use crate::dispatcher::OperationDispatcher;
use crate::report::SessionReport;
use mentor_core::OperationResult;
use mentor_core::config::MentorConfig;
use mentor_core::error::{MentorError, Result};
use mentor_core::session::SessionRepository;
use mentor_core::state::SessionDocument;
use mentor_infrastructure::InMemorySessionRepository;
use serde_json::Value;
use std::sync::Arc;

/// Entry point for advisory modules and front ends.
///
/// Resolves the session a call targets and hands it to the dispatcher.
/// Operations on different sessions run independently; operations on the
/// same session run one at a time.
pub struct LearningAssistant {
    sessions: Arc<dyn SessionRepository>,
    dispatcher: OperationDispatcher,
}

impl LearningAssistant {
    pub fn new(sessions: Arc<dyn SessionRepository>, context: HandlerContext) -> Self {
        Self {
            sessions,
            dispatcher: OperationDispatcher::new(context),
        }
    }

    /// In-memory sessions with handlers configured from `config`.
    pub fn from_config(config: &MentorConfig) -> Self {
        Self::new(
            Arc::new(InMemorySessionRepository::new()),
            HandlerContext::from_config(config),
        )
    }

    pub fn dispatcher(&self) -> &OperationDispatcher {
        &self.dispatcher
    }

    /// Invokes `operation` on `session_id`, opening the session if needed.
    pub async fn invoke(&self, session_id: &str, operation: &str, args: Value) -> Result<OperationResult> {
        let session = self.sessions.open(session_id).await?;
        Ok(self.dispatcher.dispatch(&session, operation, args).await)
    }

    /// Copy of a session's document.
    pub async fn snapshot(&self, session_id: &str) -> Result<SessionDocument> {
        let session = self
            .sessions
            .find(session_id)
            .await?
            .ok_or_else(|| MentorError::not_found("Session", session_id))?;
        Ok(session.snapshot().await)
    }

    pub async fn report(&self, session_id: &str) -> Result<SessionReport> {
        let snapshot = self.snapshot(session_id).await?;
        Ok(SessionReport::from_document(session_id, &snapshot))
    }

    /// Drops a session and everything in it.
    pub async fn end_session(&self, session_id: &str) -> Result<()> {
        tracing::info!("[LearningAssistant] Ending session {}", session_id);
        self.sessions.remove(session_id).await
    }
}
