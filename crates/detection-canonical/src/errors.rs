use serde::Serialize;
use thiserror::Error;

use crate::report::ConversionStatus;

/// Diagnostics produced while converting a record to or from JSON.
///
/// These are never returned as `Err` from the record contract; they are
/// collected in a [`crate::ConversionReport`] so the caller can branch on them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionError {
    /// The input text is not valid JSON.
    #[error("{record}: invalid JSON: {reason}")]
    InvalidJson {
        /// Record being populated.
        record: &'static str,
        /// Parser message.
        reason: String,
    },
    /// The input is valid JSON but not an object.
    #[error("{record}: expected a JSON object, found {found}")]
    NotAnObject {
        /// Record being populated.
        record: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },
    /// The required field group could not be read and was left untouched.
    #[error("{record}: required fields not read: {reason}")]
    RequiredGroup {
        /// Record being populated.
        record: &'static str,
        /// Why the group was abandoned.
        reason: String,
    },
    /// An optional key was present with the wrong type and was not assigned.
    #[error("{record}: optional {key} skipped, expected {expected} but found {found}")]
    OptionalSkipped {
        /// Record being populated.
        record: &'static str,
        /// JSON key that was skipped.
        key: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type that was found.
        found: &'static str,
    },
    /// A required field was never assigned and its key was omitted.
    #[error("{record}: missing required {key}")]
    MissingRequired {
        /// Record being serialized.
        record: &'static str,
        /// JSON key that was omitted.
        key: &'static str,
    },
    /// A number could not be represented in JSON (NaN or infinite).
    #[error("{record}: non-finite number in {key}")]
    NonFiniteNumber {
        /// Record being serialized.
        record: &'static str,
        /// JSON key that was omitted.
        key: &'static str,
    },
    /// A timestamp was accepted but did not use the canonical format.
    #[error("{record}: {key} normalized from '{original}' to '{canonical}'")]
    TimeNormalized {
        /// Record being populated.
        record: &'static str,
        /// JSON key holding the timestamp.
        key: &'static str,
        /// Text as received.
        original: String,
        /// Canonical text the value re-encodes to.
        canonical: String,
    },
}

impl ConversionError {
    /// Severity this diagnostic contributes to a report.
    pub fn status(&self) -> ConversionStatus {
        match self {
            ConversionError::OptionalSkipped { .. } | ConversionError::TimeNormalized { .. } => {
                ConversionStatus::Lossy
            }
            _ => ConversionStatus::Invalid,
        }
    }
}

/// Human-readable JSON type name for diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
