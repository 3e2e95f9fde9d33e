//! Session repository trait.
//!
//! Defines how session stores are created, looked up and discarded.

use crate::error::Result;
use crate::state::SessionStore;
use async_trait::async_trait;
use std::sync::Arc;

/// An abstract registry of session stores keyed by session id.
///
/// Sessions live only as long as the repository holds them; there is no
/// persistence contract.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the store for `session_id`, creating an empty one on first use.
    async fn open(&self, session_id: &str) -> Result<Arc<SessionStore>>;

    /// Finds an existing session store.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(store))`: Session exists
    /// - `Ok(None)`: Session was never opened or has been removed
    async fn find(&self, session_id: &str) -> Result<Option<Arc<SessionStore>>>;

    /// Discards a session. Removing an unknown id is not an error.
    async fn remove(&self, session_id: &str) -> Result<()>;

    /// Ids of all live sessions, sorted.
    async fn list_ids(&self) -> Result<Vec<String>>;
}
