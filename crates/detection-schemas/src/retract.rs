//! Retract record: withdraws a previously sent detection message.

use detection_canonical::fields::{read_required_group, required_entry, MapWriter};
use detection_canonical::{ConversionError, ConversionReport, JsonMap, Record, Validator};
use serde::Deserialize;

use crate::source::Source;

/// JSON key for the message type discriminator.
pub const TYPE_KEY: &str = "Type";
/// JSON key for the retracted message identifier.
pub const ID_KEY: &str = "ID";
/// JSON key for the embedded source.
pub const SOURCE_KEY: &str = "Source";

/// Every key in the Retract vocabulary.
pub const KEYS: &[&str] = &[TYPE_KEY, ID_KEY, SOURCE_KEY];

/// Fixed value of the `Type` discriminator.
pub const RETRACT_TYPE: &str = "Retract";

/// Retraction of a detection message, attributed to a source.
///
/// A new retract carries `Type = "Retract"` and an empty [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retract {
    /// Discriminator; must equal [`RETRACT_TYPE`].
    pub kind: Option<String>,
    /// Identifier of the retracted message. Required, non-empty.
    pub id: Option<String>,
    /// Who issued the retraction. Required, must itself be valid.
    pub source: Option<Source>,
}

impl Default for Retract {
    fn default() -> Self {
        Self {
            kind: Some(RETRACT_TYPE.to_string()),
            id: None,
            source: Some(Source::default()),
        }
    }
}

#[derive(Deserialize)]
struct RequiredGroup {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "ID")]
    id: String,
}

impl Retract {
    /// Creates a retraction of `id` issued by `source`.
    pub fn new(id: impl Into<String>, source: Source) -> Self {
        Self {
            id: Some(id.into()),
            source: Some(source),
            ..Self::default()
        }
    }

    fn read_required(
        &self,
        map: &JsonMap,
    ) -> Result<(RequiredGroup, Source, ConversionReport), ConversionError> {
        let group: RequiredGroup = read_required_group(map, Self::NAME)?;
        let entry = required_entry(map, Self::NAME, SOURCE_KEY)?;

        let mut source = self.source.clone().unwrap_or_default();
        let nested = source.fill_from_value(entry);
        if nested.is_invalid() {
            return Err(ConversionError::RequiredGroup {
                record: Self::NAME,
                reason: format!("{SOURCE_KEY}: {}", nested.messages().join("; ")),
            });
        }
        Ok((group, source, nested))
    }
}

impl Record for Retract {
    const NAME: &'static str = "Retract";

    fn fill_from_map(&mut self, map: &JsonMap) -> ConversionReport {
        let mut report = ConversionReport::new();

        match self.read_required(map) {
            Ok((group, source, nested)) => {
                self.kind = Some(group.kind);
                self.id = Some(group.id);
                self.source = Some(source);
                report.merge(nested);
            }
            Err(err) => {
                tracing::warn!(record = Self::NAME, error = %err, "required group abandoned");
                report.push(err);
            }
        }

        tracing::debug!(record = Self::NAME, status = ?report.status, "populated from map");
        report
    }

    fn to_map_with_report(&self) -> (JsonMap, ConversionReport) {
        let mut writer = MapWriter::new(Self::NAME);
        writer
            .required_str(TYPE_KEY, self.kind.as_deref())
            .required_str(ID_KEY, self.id.as_deref())
            .required_record(SOURCE_KEY, self.source.as_ref());
        writer.finish()
    }

    fn errors(&self) -> Vec<String> {
        Validator::new(Self::NAME)
            .literal(TYPE_KEY, self.kind.as_deref(), RETRACT_TYPE)
            .non_empty(ID_KEY, self.id.as_deref())
            .nested(SOURCE_KEY, self.source.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_type_and_empty_source() {
        let retract = Retract::default();
        assert_eq!(retract.kind.as_deref(), Some("Retract"));
        assert_eq!(retract.source, Some(Source::default()));
        assert_eq!(retract.id, None);
    }

    #[test]
    fn default_reports_missing_id_and_invalid_source() {
        assert_eq!(
            Retract::default().errors(),
            vec![
                "No ID in Retract Class.".to_string(),
                "Invalid Source in Retract Class.".to_string(),
            ]
        );
    }

    #[test]
    fn cleared_fields_are_reported_as_absent() {
        let retract = Retract {
            kind: None,
            id: Some(String::new()),
            source: None,
        };
        assert_eq!(
            retract.errors(),
            vec![
                "No Type in Retract Class.".to_string(),
                "Empty ID in Retract Class.".to_string(),
                "No Source in Retract Class.".to_string(),
            ]
        );
    }

    #[test]
    fn missing_source_is_omitted_and_reported_on_serialization() {
        let retract = Retract {
            source: None,
            ..Retract::new("abc123", Source::default())
        };
        let (map, report) = retract.to_map_with_report();
        assert!(!map.contains_key(SOURCE_KEY));
        assert_eq!(map[ID_KEY], "abc123");
        assert_eq!(
            report.diagnostics,
            vec![ConversionError::MissingRequired {
                record: "Retract",
                key: "Source"
            }]
        );
    }
}
