//! In-memory session repository.

use async_trait::async_trait;
use mentor_core::error::Result;
use mentor_core::session::SessionRepository;
use mentor_core::state::SessionStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps session stores in a map for the lifetime of the process.
///
/// The map lock is only held while looking a session up or inserting it;
/// operations on a session contend on that session's own lock.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Arc<SessionStore>>>>,
}

impl InMemorySessionRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn open(&self, session_id: &str) -> Result<Arc<SessionStore>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(store) = sessions.get(session_id) {
                return Ok(store.clone());
            }
        }

        let mut sessions = self.sessions.write().await;
        // Another caller may have opened it between the two locks
        let store = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!("[InMemorySessionRepository] Opening session: {}", session_id);
                Arc::new(SessionStore::new(session_id))
            })
            .clone();
        Ok(store)
    }

    async fn find(&self, session_id: &str) -> Result<Option<Arc<SessionStore>>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(session_id).is_some() {
            tracing::debug!("[InMemorySessionRepository] Removed session: {}", session_id);
        }
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<String>> {
        let sessions = self.sessions.read().await;
        let mut ids: Vec<String> = sessions.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::state::StateStore;

    #[tokio::test]
    async fn test_open_creates_once() {
        let repo = InMemorySessionRepository::new();

        let first = repo.open("learner-1").await.unwrap();
        {
            let mut doc = first.lock().await;
            doc.set("pace_preferences", serde_json::json!({"ml_basics": "slower"}));
        }

        let second = repo.open("learner-1").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(repo.list_ids().await.unwrap(), vec!["learner-1".to_string()]);
    }

    #[tokio::test]
    async fn test_find_and_remove() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find("missing").await.unwrap().is_none());

        repo.open("b").await.unwrap();
        repo.open("a").await.unwrap();
        assert_eq!(repo.list_ids().await.unwrap(), vec!["a", "b"]);

        repo.remove("a").await.unwrap();
        repo.remove("never-opened").await.unwrap();
        assert!(repo.find("a").await.unwrap().is_none());
        assert!(repo.find("b").await.unwrap().is_some());
    }
}
