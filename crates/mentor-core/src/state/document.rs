//! The session document and its get/set contract.

use super::collection::{Collection, CollectionShape};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Narrow read/write contract every operation handler is given.
///
/// `get` never mutates and returns `default` when the collection is absent.
/// `set` replaces the whole collection value. The store never inspects value
/// shapes; handlers own their collection invariants.
pub trait StateStore: Send {
    fn get(&self, collection: &str, default: Value) -> Value;

    fn set(&mut self, collection: &str, value: Value);
}

/// Shape-aware helpers over [`StateStore`].
///
/// Values are always cloned out and written back whole, so a handler can
/// compute a replacement without touching what other readers see.
pub trait CollectionAccess: StateStore {
    /// Reads a map collection. Absent or non-map values read as empty.
    fn read_map(&self, collection: Collection) -> Map<String, Value> {
        debug_assert_eq!(collection.shape(), CollectionShape::Map);
        match self.get(collection.name(), collection.empty_default()) {
            Value::Object(map) => map,
            other => {
                tracing::warn!(
                    "Collection {} holds a non-map value ({}), reading as empty",
                    collection,
                    kind_of(&other)
                );
                Map::new()
            }
        }
    }

    /// Reads a sequence collection. Absent or non-sequence values read as empty.
    fn read_sequence(&self, collection: Collection) -> Vec<Value> {
        debug_assert_eq!(collection.shape(), CollectionShape::Sequence);
        match self.get(collection.name(), collection.empty_default()) {
            Value::Array(items) => items,
            other => {
                tracing::warn!(
                    "Collection {} holds a non-sequence value ({}), reading as empty",
                    collection,
                    kind_of(&other)
                );
                Vec::new()
            }
        }
    }

    fn write_map(&mut self, collection: Collection, map: Map<String, Value>) {
        self.set(collection.name(), Value::Object(map));
    }

    fn write_sequence(&mut self, collection: Collection, items: Vec<Value>) {
        self.set(collection.name(), Value::Array(items));
    }
}

impl<S: StateStore + ?Sized> CollectionAccess for S {}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}

/// In-memory state of one learner session: collection name -> value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionDocument {
    collections: BTreeMap<String, Value>,
}

impl SessionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, collection: &str) -> bool {
        self.collections.contains_key(collection)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl StateStore for SessionDocument {
    fn get(&self, collection: &str, default: Value) -> Value {
        self.collections.get(collection).cloned().unwrap_or(default)
    }

    fn set(&mut self, collection: &str, value: Value) {
        self.collections.insert(collection.to_string(), value);
    }
}
