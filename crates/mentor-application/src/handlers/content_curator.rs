//! Saved resources.

use super::OperationOutcome;
use crate::context::HandlerContext;
use crate::interaction_log::InteractionLog;
use mentor_core::error::{MentorError, Result};
use mentor_core::model::resource::DEFAULT_RESOURCE_TYPE;
use mentor_core::model::{InteractionRecord, SavedResource, Verbatim};
use mentor_core::state::{Collection, CollectionAccess, StateStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveResourceRequest {
    pub resource_id: Verbatim,
    pub resource_name: Verbatim,
    pub resource_type: Verbatim,
    pub resource_url: Verbatim,
}

impl Default for SaveResourceRequest {
    fn default() -> Self {
        Self {
            resource_id: Verbatim::default(),
            resource_name: Verbatim::default(),
            resource_type: Verbatim::new(DEFAULT_RESOURCE_TYPE),
            resource_url: Verbatim::default(),
        }
    }
}

impl SaveResourceRequest {
    pub fn new(resource_id: impl Into<Value>, resource_name: impl Into<Value>) -> Self {
        Self {
            resource_id: Verbatim::new(resource_id),
            resource_name: Verbatim::new(resource_name),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSaved {
    pub resource_id: Verbatim,
    pub timestamp: String,
    #[serde(skip)]
    pub resource_name: Verbatim,
}

impl OperationOutcome for ResourceSaved {
    fn message(&self) -> String {
        format!("Successfully saved {} to your resources!", self.resource_name)
    }
}

#[derive(Debug, Clone)]
pub struct ContentCuratorHandler {
    context: HandlerContext,
}

impl ContentCuratorHandler {
    pub fn new(context: HandlerContext) -> Self {
        Self { context }
    }

    /// Appends a resource unless one with the same id is already saved.
    ///
    /// Ids compare as JSON values, so `7` and `"7"` are different resources.
    /// Entries without an id are dropped from the rewritten list.
    pub fn save_resource(
        &self,
        store: &mut dyn StateStore,
        request: SaveResourceRequest,
    ) -> Result<ResourceSaved> {
        let existing = store.read_sequence(Collection::SavedResources);
        if existing
            .iter()
            .filter_map(SavedResource::stored_id)
            .any(|id| request.resource_id.matches(id))
        {
            tracing::warn!(
                "[ContentCurator] Resource already saved: {}",
                request.resource_id
            );
            return Err(MentorError::already_exists(
                "resource",
                request.resource_id.to_string(),
            ));
        }

        let timestamp = self.context.timestamp();
        let before = existing.len();
        let mut resources: Vec<Value> = existing
            .into_iter()
            .filter(SavedResource::is_well_formed)
            .collect();
        if resources.len() != before {
            tracing::debug!(
                "[ContentCurator] Dropped {} malformed saved resource(s)",
                before - resources.len()
            );
        }

        let resource = SavedResource {
            id: request.resource_id.clone(),
            name: request.resource_name.clone(),
            resource_type: request.resource_type,
            url: request.resource_url,
            saved_date: timestamp.clone(),
        };
        resources.push(serde_json::to_value(&resource)?);
        let audit = InteractionLog::prepare(&InteractionRecord::SaveResource {
            resource_id: request.resource_id.clone(),
            resource_name: request.resource_name.clone(),
            timestamp: timestamp.clone(),
        })?;

        store.write_sequence(Collection::SavedResources, resources);
        audit.commit(store);

        tracing::info!("[ContentCurator] Saved resource {}", request.resource_id);
        Ok(ResourceSaved {
            resource_id: request.resource_id,
            timestamp,
            resource_name: request.resource_name,
        })
    }
}
