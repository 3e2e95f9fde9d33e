//! Capabilities shared by every operation handler.

use chrono::NaiveDateTime;
use mentor_core::clock::{Clock, SystemClock, format_timestamp};
use mentor_core::config::{MentorConfig, ProgressPolicy};
use mentor_core::id::{IdGenerator, generator_for};
use std::sync::Arc;

/// Clock, id generator and policy injected into handlers.
#[derive(Clone)]
pub struct HandlerContext {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    progress_policy: ProgressPolicy,
}

impl HandlerContext {
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        progress_policy: ProgressPolicy,
    ) -> Self {
        Self {
            clock,
            ids,
            progress_policy,
        }
    }

    /// System clock plus the configured id strategy and progress policy.
    pub fn from_config(config: &MentorConfig) -> Self {
        Self::new(
            Arc::new(SystemClock),
            generator_for(config.ids.strategy),
            config.goals.progress_policy,
        )
    }

    pub fn timestamp(&self) -> String {
        self.clock.timestamp()
    }

    /// Reads the clock once and returns the instant with its formatted form.
    pub fn stamp(&self) -> (NaiveDateTime, String) {
        let now = self.clock.now();
        let formatted = format_timestamp(&now);
        (now, formatted)
    }

    pub fn next_id(&self, prefix: &str, at: &NaiveDateTime) -> String {
        self.ids.next_id(prefix, at)
    }

    pub fn progress_policy(&self) -> ProgressPolicy {
        self.progress_policy
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("progress_policy", &self.progress_policy)
            .finish_non_exhaustive()
    }
}
