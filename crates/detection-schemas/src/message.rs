//! Typed dispatch over the record catalog.

use std::fmt;
use std::str::FromStr;

use detection_canonical::{ConversionError, ConversionReport, Record};
use serde_json::Value;
use thiserror::Error;

use crate::{hypocenter, retract, source, Hypocenter, Retract, Source};

/// Name that does not match any record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message kind '{0}' (expected hypocenter, source or retract)")]
pub struct UnknownKind(pub String);

/// Record types in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// [`Hypocenter`].
    Hypocenter,
    /// [`Source`].
    Source,
    /// [`Retract`].
    Retract,
}

impl MessageKind {
    /// Guesses the record type from a decoded JSON value.
    ///
    /// `Type == "Retract"` wins, then the presence of `Latitude`, then
    /// `AgencyID`.
    pub fn detect(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        if map.get(retract::TYPE_KEY).and_then(Value::as_str) == Some(retract::RETRACT_TYPE) {
            Some(Self::Retract)
        } else if map.contains_key(hypocenter::LATITUDE_KEY) {
            Some(Self::Hypocenter)
        } else if map.contains_key(source::AGENCY_ID_KEY) {
            Some(Self::Source)
        } else {
            None
        }
    }

    /// JSON key vocabulary of the record type.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::Hypocenter => hypocenter::KEYS,
            Self::Source => source::KEYS,
            Self::Retract => retract::KEYS,
        }
    }

    /// Record class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hypocenter => Hypocenter::NAME,
            Self::Source => Source::NAME,
            Self::Retract => Retract::NAME,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hypocenter" => Ok(Self::Hypocenter),
            "source" => Ok(Self::Source),
            "retract" => Ok(Self::Retract),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A record of any catalog type.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Hypocenter message.
    Hypocenter(Hypocenter),
    /// Source message.
    Source(Source),
    /// Retract message.
    Retract(Retract),
}

impl Message {
    /// Parses JSON text as `kind`, or as the detected kind when `kind` is `None`.
    ///
    /// Returns `None` only when no kind was given and none could be detected;
    /// malformed JSON is reported against the requested or a hypocenter record.
    pub fn parse(kind: Option<MessageKind>, text: &str) -> Option<(Self, ConversionReport)> {
        let value = match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(err) => {
                let kind = kind.unwrap_or(MessageKind::Hypocenter);
                let report = ConversionReport::from_error(ConversionError::InvalidJson {
                    record: kind.as_str(),
                    reason: err.to_string(),
                });
                return Some((Self::empty(kind), report));
            }
        };
        let kind = kind.or_else(|| MessageKind::detect(&value))?;
        Some(Self::from_value(kind, &value))
    }

    /// Populates a fresh record of `kind` from a JSON value.
    pub fn from_value(kind: MessageKind, value: &Value) -> (Self, ConversionReport) {
        let mut message = Self::empty(kind);
        let report = match &mut message {
            Self::Hypocenter(record) => record.fill_from_value(value),
            Self::Source(record) => record.fill_from_value(value),
            Self::Retract(record) => record.fill_from_value(value),
        };
        (message, report)
    }

    /// Empty record of `kind`.
    pub fn empty(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Hypocenter => Self::Hypocenter(Hypocenter::default()),
            MessageKind::Source => Self::Source(Source::default()),
            MessageKind::Retract => Self::Retract(Retract::default()),
        }
    }

    /// Record type of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Hypocenter(_) => MessageKind::Hypocenter,
            Self::Source(_) => MessageKind::Source,
            Self::Retract(_) => MessageKind::Retract,
        }
    }

    /// Validation errors of the wrapped record.
    pub fn errors(&self) -> Vec<String> {
        match self {
            Self::Hypocenter(record) => record.errors(),
            Self::Source(record) => record.errors(),
            Self::Retract(record) => record.errors(),
        }
    }

    /// True when the wrapped record validates.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// JSON value of the wrapped record.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Hypocenter(record) => record.to_value(),
            Self::Source(record) => record.to_value(),
            Self::Retract(record) => record.to_value(),
        }
    }

    /// Canonical JSON text of the wrapped record.
    pub fn to_json_string(&self) -> String {
        match self {
            Self::Hypocenter(record) => record.to_json_string(),
            Self::Source(record) => record.to_json_string(),
            Self::Retract(record) => record.to_json_string(),
        }
    }
}
