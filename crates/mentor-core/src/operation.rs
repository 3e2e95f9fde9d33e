//! Result records returned to operation callers.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationStatus {
    Success,
    Error,
}

/// What every operation hands back: status, message, timestamp and the
/// operation-specific echoed fields flattened alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub status: OperationStatus,
    pub message: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl OperationResult {
    pub fn error(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Error,
            message: message.into(),
            timestamp: timestamp.into(),
            fields: Map::new(),
        }
    }

    /// Success result whose echoed fields are the serialized `outcome`.
    ///
    /// `outcome` must serialize to a JSON object. A `timestamp` key in it is
    /// folded into the result's own timestamp.
    pub fn from_outcome<T: Serialize + ?Sized>(
        message: impl Into<String>,
        outcome: &T,
    ) -> Result<Self> {
        let mut fields = match serde_json::to_value(outcome)? {
            Value::Object(map) => map,
            other => {
                return Err(crate::MentorError::internal(format!(
                    "operation outcome must serialize to an object, got {}",
                    other
                )));
            }
        };
        let timestamp = match fields.remove("timestamp") {
            Some(Value::String(ts)) => ts,
            _ => String::new(),
        };

        Ok(Self {
            status: OperationStatus::Success,
            message: message.into(),
            timestamp,
            fields,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
