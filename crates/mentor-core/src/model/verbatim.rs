//! Caller-supplied values stored exactly as given.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An argument value kept as the caller sent it.
///
/// Nothing is coerced or validated: a number where a string was expected is
/// stored as a number. An absent argument reads as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verbatim(Value);

impl Verbatim {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Numeric reading, if the value is a JSON number.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Empty string or `null`.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether a stored value is the same JSON value as this one.
    pub fn matches(&self, stored: &Value) -> bool {
        &self.0 == stored
    }
}

impl Default for Verbatim {
    fn default() -> Self {
        Self(Value::String(String::new()))
    }
}

/// Strings render bare; any other value renders as compact JSON.
impl fmt::Display for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Args {
        course_id: Verbatim,
    }

    #[test]
    fn test_any_json_type_is_accepted() {
        let args: Args = serde_json::from_value(json!({"course_id": 101})).unwrap();
        assert_eq!(args.course_id.as_value(), &json!(101));
        assert_eq!(args.course_id.to_string(), "101");

        let args: Args = serde_json::from_value(json!({"course_id": ["a", 1]})).unwrap();
        assert_eq!(args.course_id.to_string(), r#"["a",1]"#);
    }

    #[test]
    fn test_absent_reads_as_empty_string() {
        let args: Args = serde_json::from_value(json!({})).unwrap();
        assert_eq!(args.course_id.as_value(), &json!(""));
        assert!(args.course_id.is_blank());
    }

    #[test]
    fn test_serializes_transparently() {
        assert_eq!(serde_json::to_value(Verbatim::new(75.5)).unwrap(), json!(75.5));
        assert_eq!(Verbatim::new("easier").to_string(), "easier");
        assert!(Verbatim::new(7).matches(&json!(7)));
        assert!(!Verbatim::new(7).matches(&json!("7")));
    }
}
