//! Session-scoped store with exclusive invocation access.

use super::document::SessionDocument;
use tokio::sync::{Mutex, MutexGuard};

/// Owns one session's document.
///
/// Every operation invocation takes the guard from [`SessionStore::lock`] and
/// holds it across its read, compute and write steps, so no two invocations
/// interleave on the same session.
#[derive(Debug)]
pub struct SessionStore {
    id: String,
    document: Mutex<SessionDocument>,
}

impl SessionStore {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_document(id, SessionDocument::new())
    }

    pub fn with_document(id: impl Into<String>, document: SessionDocument) -> Self {
        Self {
            id: id.into(),
            document: Mutex::new(document),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Waits for exclusive access to the document.
    pub async fn lock(&self) -> MutexGuard<'_, SessionDocument> {
        self.document.lock().await
    }

    /// A copy of the document as it is between invocations.
    pub async fn snapshot(&self) -> SessionDocument {
        self.document.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::document::StateStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = SessionStore::new("s1");
        {
            let mut doc = store.lock().await;
            doc.set("feedback_list", json!([{"id": "a"}]));
        }

        let snapshot = store.snapshot().await;
        {
            let mut doc = store.lock().await;
            doc.set("feedback_list", json!([]));
        }

        assert_eq!(snapshot.get("feedback_list", json!(null)), json!([{"id": "a"}]));
        assert_eq!(store.id(), "s1");
    }
}
