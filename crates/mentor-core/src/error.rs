//! Error types for the Mentor learner state store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Mentor workspace.
///
/// Documented operation failures (duplicate resource, unknown goal, rejected
/// progress) and caller mistakes (unknown operation, malformed arguments) are
/// both represented here. The dispatcher turns every variant into an `error`
/// result for the caller.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MentorError {
    /// Entity not found error with type information
    #[error("{entity_type} with ID {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Entity already present in an id-unique collection
    #[error("This {entity_type} is already saved!")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// Argument rejected by a configured policy or not decodable
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// Operation name not known to the dispatcher
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// IO error (configuration files)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MentorError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an AlreadyExists error
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidArgument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an AlreadyExists error
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Check if this is an InvalidArgument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Whether the error is one of the documented operation outcomes that a
    /// caller is expected to handle by adjusting its arguments.
    pub fn is_operation_failure(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::AlreadyExists { .. } | Self::InvalidArgument { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MentorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MentorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MentorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MentorError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MentorError>`.
pub type Result<T> = std::result::Result<T, MentorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_id() {
        let err = MentorError::not_found("Goal", "missing_id");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Goal with ID missing_id not found");
    }

    #[test]
    fn test_already_exists_message() {
        let err = MentorError::already_exists("resource", "r1");
        assert!(err.is_already_exists());
        assert!(err.is_operation_failure());
        assert_eq!(err.to_string(), "This resource is already saved!");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MentorError = parse_err.into();
        assert!(err.is_serialization());
        assert!(!err.is_operation_failure());
    }
}
