//! Canonical primitives shared by every detection message record.
//!
//! This crate provides:
//! - The [`Record`] contract (populate from JSON, serialize, validate)
//! - Conversion reports that surface parse and missing-data problems as data
//! - The timestamp codec used for every `Time` field on the wire
//! - Canonical JSON text rendering
//!
//! Core invariants:
//! - Conversion never panics and never fails the caller; problems are
//!   returned in a [`ConversionReport`]
//! - Validation is non-short-circuiting and deterministic in order
//! - A field that was never assigned is never emitted
//!
#![deny(missing_docs)]

/// Canonical JSON text rendering.
pub mod canonicalizer;
/// Conversion diagnostics.
pub mod errors;
/// Helpers for reading and writing record fields on a JSON mapping.
pub mod fields;
/// The record contract.
pub mod record;
/// Conversion reports.
pub mod report;
/// Timestamp codec for the `YYYY-MM-DDTHH:MM:SS.sssZ` wire format.
pub mod time;
/// Validation message accumulation.
pub mod validation;

pub use canonicalizer::{render, to_canonical_string, CanonicalizationError};
pub use errors::ConversionError;
pub use record::{JsonMap, Record};
pub use report::{ConversionReport, ConversionStatus};
pub use time::TimeError;
pub use validation::Validator;
