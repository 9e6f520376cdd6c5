use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::errors::{json_type_name, ConversionError};
use crate::record::{JsonMap, Record};
use crate::report::ConversionReport;
use crate::time;

/// Deserializes a record's required keys as one group.
///
/// Any missing or mistyped key fails the whole group, so callers assign the
/// result only on success. The group deserializes straight from the borrowed
/// mapping and may borrow string fields from it; unknown keys are skipped.
pub fn read_required_group<'a, G: Deserialize<'a>>(
    map: &'a JsonMap,
    record: &'static str,
) -> Result<G, ConversionError> {
    G::deserialize(map).map_err(|err| ConversionError::RequiredGroup {
        record,
        reason: err.to_string(),
    })
}

/// Looks up a required key that the group reads by reference.
pub fn required_entry<'a>(
    map: &'a JsonMap,
    record: &'static str,
    key: &'static str,
) -> Result<&'a Value, ConversionError> {
    map.get(key).ok_or_else(|| ConversionError::RequiredGroup {
        record,
        reason: format!("missing field `{key}`"),
    })
}

/// Decodes a required timestamp that belongs to a required group.
///
/// Returns the instant plus a `TimeNormalized` note when the text was not
/// already canonical.
pub fn decode_required_time(
    record: &'static str,
    key: &'static str,
    text: &str,
) -> Result<(DateTime<Utc>, Option<ConversionError>), ConversionError> {
    let decoded = time::decode(text).map_err(|err| ConversionError::RequiredGroup {
        record,
        reason: format!("{key}: {err}"),
    })?;
    let note = (!time::is_canonical(text)).then(|| ConversionError::TimeNormalized {
        record,
        key,
        original: text.to_string(),
        canonical: time::encode(&decoded),
    });
    Ok((decoded, note))
}

/// Reads an optional number into `slot`.
///
/// An absent key leaves `slot` as it was; a mistyped key is skipped and noted.
pub fn read_optional_f64(
    map: &JsonMap,
    record: &'static str,
    key: &'static str,
    slot: &mut Option<f64>,
    report: &mut ConversionReport,
) {
    let Some(value) = map.get(key) else {
        return;
    };
    match value.as_f64() {
        Some(number) => *slot = Some(number),
        None => report.push(ConversionError::OptionalSkipped {
            record,
            key,
            expected: "number",
            found: json_type_name(value),
        }),
    }
}

/// Builds a record's JSON mapping, noting every required key it had to omit.
#[derive(Debug)]
pub struct MapWriter {
    record: &'static str,
    map: JsonMap,
    report: ConversionReport,
}

impl MapWriter {
    /// Starts an empty mapping for `record`.
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            map: JsonMap::new(),
            report: ConversionReport::new(),
        }
    }

    /// Writes a required number.
    pub fn required_f64(&mut self, key: &'static str, value: Option<f64>) -> &mut Self {
        match value {
            Some(number) => self.number(key, number),
            None => self.missing(key),
        }
        self
    }

    /// Writes an optional number if present.
    pub fn optional_f64(&mut self, key: &'static str, value: Option<f64>) -> &mut Self {
        if let Some(number) = value {
            self.number(key, number);
        }
        self
    }

    /// Writes a required string.
    pub fn required_str(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(text) => {
                self.map.insert(key.to_string(), Value::String(text.to_string()));
            }
            None => self.missing(key),
        }
        self
    }

    /// Writes a required timestamp in wire format.
    pub fn required_time(&mut self, key: &'static str, value: Option<&DateTime<Utc>>) -> &mut Self {
        match value {
            Some(instant) => {
                self.map
                    .insert(key.to_string(), Value::String(time::encode(instant)));
            }
            None => self.missing(key),
        }
        self
    }

    /// Writes a required embedded record, folding in its own report.
    pub fn required_record<R: Record>(&mut self, key: &'static str, value: Option<&R>) -> &mut Self {
        match value {
            Some(nested) => {
                let (map, report) = nested.to_map_with_report();
                self.map.insert(key.to_string(), Value::Object(map));
                self.report.merge(report);
            }
            None => self.missing(key),
        }
        self
    }

    /// Returns the mapping and the report.
    pub fn finish(self) -> (JsonMap, ConversionReport) {
        (self.map, self.report)
    }

    fn number(&mut self, key: &'static str, number: f64) {
        match Number::from_f64(number) {
            Some(number) => {
                self.map.insert(key.to_string(), Value::Number(number));
            }
            None => self.report.push(ConversionError::NonFiniteNumber {
                record: self.record,
                key,
            }),
        }
    }

    fn missing(&mut self, key: &'static str) {
        self.report.push(ConversionError::MissingRequired {
            record: self.record,
            key,
        });
    }
}
