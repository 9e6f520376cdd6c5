//! Wire timestamps are UTC, millisecond precision, with a literal `Z`:
//! `YYYY-MM-DDTHH:MM:SS.sssZ`. Producers disagree on the number of
//! fractional digits, so decoding always drops the final character, pads the
//! fraction with `000Z` and reads whatever digits are there.
//!
//! Fractions longer than three digits are accepted on purpose and truncated
//! to milliseconds rather than rejected.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use regex::Regex;
use thiserror::Error;

const DECODE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const ENCODE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const CANONICAL_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$";
const PAD: &str = "000Z";
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Errors raised while decoding a wire timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Nothing to decode.
    #[error("empty timestamp")]
    Empty,
    /// The normalized text did not match the timestamp layout.
    #[error("unparseable timestamp '{input}': {reason}")]
    Unparseable {
        /// Text as received.
        input: String,
        /// Parser message.
        reason: String,
    },
}

/// Decodes a wire timestamp, truncated to millisecond precision.
pub fn decode(text: &str) -> Result<DateTime<Utc>, TimeError> {
    let mut chars = text.chars();
    if chars.next_back().is_none() {
        return Err(TimeError::Empty);
    }
    let padded = format!("{}{}", chars.as_str(), PAD);

    let naive = NaiveDateTime::parse_from_str(&padded, DECODE_FORMAT).map_err(|err| {
        TimeError::Unparseable {
            input: text.to_string(),
            reason: err.to_string(),
        }
    })?;
    Ok(truncate_to_millis(Utc.from_utc_datetime(&naive)))
}

/// Encodes an instant at fixed millisecond precision.
pub fn encode(time: &DateTime<Utc>) -> String {
    time.format(ENCODE_FORMAT).to_string()
}

/// True when `text` is already in the exact wire format.
pub fn is_canonical(text: &str) -> bool {
    static CANONICAL: OnceLock<Option<Regex>> = OnceLock::new();
    CANONICAL
        .get_or_init(|| Regex::new(CANONICAL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

/// Drops sub-millisecond precision.
pub fn truncate_to_millis(time: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = time.nanosecond() / NANOS_PER_MILLI * NANOS_PER_MILLI;
    time.with_nanosecond(nanos).unwrap_or(time)
}
