//! Saved resource records.

use super::verbatim::Verbatim;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_RESOURCE_TYPE: &str = "general";

/// A course or external resource the learner saved for later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedResource {
    pub id: Verbatim,
    pub name: Verbatim,
    #[serde(rename = "type")]
    pub resource_type: Verbatim,
    pub url: Verbatim,
    pub saved_date: String,
}

impl SavedResource {
    /// Id of a stored entry, whatever its JSON type.
    pub fn stored_id(entry: &Value) -> Option<&Value> {
        entry.as_object()?.get("id")
    }

    /// Records carrying an `id` key survive rewrites; anything else is dropped.
    pub fn is_well_formed(entry: &Value) -> bool {
        Self::stored_id(entry).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let resource = SavedResource {
            id: Verbatim::new("cs50_harvard"),
            name: Verbatim::new("CS50"),
            resource_type: Verbatim::new(DEFAULT_RESOURCE_TYPE),
            url: Verbatim::default(),
            saved_date: "2024-03-05 09:08:07".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "id": "cs50_harvard",
                "name": "CS50",
                "type": "general",
                "url": "",
                "saved_date": "2024-03-05 09:08:07"
            })
        );
    }

    #[test]
    fn test_well_formed_entries() {
        assert!(SavedResource::is_well_formed(&json!({"id": "r1"})));
        assert!(SavedResource::is_well_formed(&json!({"id": 7})));
        assert!(SavedResource::is_well_formed(&json!({"id": null, "name": "odd"})));
        assert!(!SavedResource::is_well_formed(&json!({"name": "no id"})));
        assert!(!SavedResource::is_well_formed(&json!("r1")));
        assert_eq!(SavedResource::stored_id(&json!({"id": 7})), Some(&json!(7)));
    }
}
