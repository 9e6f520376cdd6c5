use serde::Serialize;

use crate::errors::ConversionError;

/// Outcome of a conversion call.
///
/// Ordered by severity so that merging keeps the worst status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConversionStatus {
    /// Every key was read or written without issues.
    #[default]
    Ok,
    /// Conversion completed but optional data was skipped or normalized.
    Lossy,
    /// Required data could not be read or written.
    Invalid,
}

/// Report returned by every conversion in the record contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionReport {
    /// Overall status (worst of all diagnostics).
    pub status: ConversionStatus,
    /// Diagnostics in the order they were found.
    pub diagnostics: Vec<ConversionError>,
}

impl ConversionReport {
    /// Creates a clean report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a report holding a single diagnostic.
    pub fn from_error(error: ConversionError) -> Self {
        let mut report = Self::new();
        report.push(error);
        report
    }

    /// Records a diagnostic and raises the status if needed.
    pub fn push(&mut self, error: ConversionError) {
        self.status = self.status.max(error.status());
        self.diagnostics.push(error);
    }

    /// Folds another report (e.g. from an embedded record) into this one.
    pub fn merge(&mut self, other: ConversionReport) {
        self.status = self.status.max(other.status);
        self.diagnostics.extend(other.diagnostics);
    }

    /// True when nothing was reported.
    pub fn is_ok(&self) -> bool {
        self.status == ConversionStatus::Ok
    }

    /// True when required data could not be converted.
    pub fn is_invalid(&self) -> bool {
        self.status == ConversionStatus::Invalid
    }

    /// Diagnostic messages as display strings.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}
