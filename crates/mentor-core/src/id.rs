//! Identifier generation for feedback entries and learning goals.

use crate::clock::format_timestamp;
use crate::config::IdStrategy;
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Id prefix for feedback records.
pub const FEEDBACK_PREFIX: &str = "feedback";
/// Id prefix for learning goal records.
pub const GOAL_PREFIX: &str = "goal";

/// Produces identifiers for newly created records.
pub trait IdGenerator: Send + Sync {
    /// Returns a new id for a record created at `at`.
    fn next_id(&self, prefix: &str, at: &NaiveDateTime) -> String;
}

/// `{prefix}_2024_03_05_09_08_07`: the timestamp with every separator
/// replaced by an underscore.
///
/// Two records created in the same second share an id.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, prefix: &str, at: &NaiveDateTime) -> String {
        timestamp_id(prefix, at)
    }
}

/// The timestamp form followed by a counter that never repeats within the
/// generator's lifetime.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str, at: &NaiveDateTime) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{}", timestamp_id(prefix, at), n)
    }
}

/// `{prefix}_{uuid}` with a random v4 uuid in simple form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str, _at: &NaiveDateTime) -> String {
        format!("{}_{}", prefix, Uuid::new_v4().simple())
    }
}

fn timestamp_id(prefix: &str, at: &NaiveDateTime) -> String {
    let normalized = format_timestamp(at).replace([' ', ':', '-'], "_");
    format!("{}_{}", prefix, normalized)
}

/// Builds the generator selected by configuration.
pub fn generator_for(strategy: IdStrategy) -> Arc<dyn IdGenerator> {
    match strategy {
        IdStrategy::Timestamp => Arc::new(TimestampIdGenerator),
        IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
    }
}
