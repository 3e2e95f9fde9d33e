//! Append-only interaction history.
//!
//! Handlers only ever write here. Reporting collaborators read the history
//! from a session snapshot.

use mentor_core::error::Result;
use mentor_core::model::InteractionRecord;
use mentor_core::state::{Collection, CollectionAccess, StateStore};
use serde_json::Value;

pub struct InteractionLog;

impl InteractionLog {
    /// Serializes `record` ahead of any state write, so a handler can fail
    /// before touching the store.
    pub fn prepare(record: &InteractionRecord) -> Result<PendingEntry> {
        Ok(PendingEntry {
            action: record.action(),
            entry: serde_json::to_value(record)?,
        })
    }
}

/// An audit entry ready to be appended.
#[derive(Debug)]
#[must_use = "an audit entry does nothing until committed"]
pub struct PendingEntry {
    action: &'static str,
    entry: Value,
}

impl PendingEntry {
    /// Re-reads the history, appends the entry and writes the history back.
    pub fn commit(self, store: &mut dyn StateStore) {
        let mut history = store.read_sequence(Collection::InteractionHistory);
        history.push(self.entry);
        tracing::debug!(
            "[InteractionLog] Appended {} (history length {})",
            self.action,
            history.len()
        );
        store.write_sequence(Collection::InteractionHistory, history);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::model::Verbatim;
    use mentor_core::state::SessionDocument;
    use serde_json::json;

    #[test]
    fn test_append_keeps_existing_entries() {
        let mut doc = SessionDocument::new();
        doc.set(
            "interaction_history",
            json!([{"action": "legacy", "timestamp": "2024-01-01 00:00:00"}]),
        );

        let pending = InteractionLog::prepare(&InteractionRecord::AdjustPace {
            course_id: Verbatim::new("ml_basics"),
            new_pace: Verbatim::new("slower"),
            timestamp: "2024-03-05 09:08:07".to_string(),
        })
        .unwrap();
        // Nothing is written until commit
        assert_eq!(doc.read_sequence(Collection::InteractionHistory).len(), 1);
        pending.commit(&mut doc);

        let history = doc.read_sequence(Collection::InteractionHistory);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["action"], json!("legacy"));
        assert_eq!(history[1]["action"], json!("adjust_pace"));
        assert_eq!(history[1]["new_pace"], json!("slower"));
    }
}
