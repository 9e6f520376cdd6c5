use serde_json::Value;

use crate::canonicalizer;
use crate::errors::{json_type_name, ConversionError};
use crate::report::ConversionReport;

/// Generic JSON key/value mapping a record converts to and from.
pub type JsonMap = serde_json::Map<String, Value>;

/// Behavior shared by every detection message record.
///
/// Implementors provide the three record-specific pieces (reading a mapping,
/// writing a mapping, listing validation errors); everything else is derived.
///
/// Conversion never fails the caller. A successful conversion does not imply
/// a valid record, so callers check [`Record::is_valid`] or [`Record::errors`]
/// after populating.
pub trait Record: Default + Clone + std::fmt::Debug {
    /// Class name used in diagnostics (e.g. `Hypocenter`).
    const NAME: &'static str;

    /// Populates the record from a mapping.
    ///
    /// Required keys are read as one group: if any is missing or mistyped the
    /// group is left untouched and a single diagnostic is reported. Optional
    /// keys are read independently and merge into existing state.
    fn fill_from_map(&mut self, map: &JsonMap) -> ConversionReport;

    /// Serializes present fields to a mapping, reporting absent required ones.
    fn to_map_with_report(&self) -> (JsonMap, ConversionReport);

    /// Every failed validation check, in a fixed order.
    fn errors(&self) -> Vec<String>;

    /// Populates the record from any JSON value; non-objects are reported.
    fn fill_from_value(&mut self, value: &Value) -> ConversionReport {
        match value.as_object() {
            Some(map) => self.fill_from_map(map),
            None => {
                let error = ConversionError::NotAnObject {
                    record: Self::NAME,
                    found: json_type_name(value),
                };
                tracing::warn!(record = Self::NAME, %error, "record not populated");
                ConversionReport::from_error(error)
            }
        }
    }

    /// Populates the record from JSON text.
    fn fill_from_json(&mut self, text: &str) -> ConversionReport {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.fill_from_value(&value),
            Err(err) => {
                let error = ConversionError::InvalidJson {
                    record: Self::NAME,
                    reason: err.to_string(),
                };
                tracing::warn!(record = Self::NAME, %error, "record not populated");
                ConversionReport::from_error(error)
            }
        }
    }

    /// Builds a fresh record from JSON text.
    fn from_json(text: &str) -> (Self, ConversionReport) {
        let mut record = Self::default();
        let report = record.fill_from_json(text);
        (record, report)
    }

    /// Serializes present fields to a mapping.
    ///
    /// Problems are logged rather than returned; use
    /// [`Record::to_map_with_report`] to inspect them.
    fn to_map(&self) -> JsonMap {
        let (map, report) = self.to_map_with_report();
        if !report.is_ok() {
            tracing::warn!(
                record = Self::NAME,
                status = ?report.status,
                diagnostics = ?report.messages(),
                "record serialized with omissions"
            );
        }
        map
    }

    /// Serializes present fields to a JSON value.
    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Serializes present fields to canonical JSON text.
    fn to_json_string(&self) -> String {
        canonicalizer::render(&self.to_value())
    }

    /// True iff [`Record::errors`] is empty.
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
