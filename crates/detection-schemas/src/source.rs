//! Source record: attribution of a detection to an agency and author.

use detection_canonical::fields::{read_required_group, MapWriter};
use detection_canonical::{ConversionReport, JsonMap, Record, Validator};
use serde::Deserialize;

/// JSON key for the agency identifier.
pub const AGENCY_ID_KEY: &str = "AgencyID";
/// JSON key for the author.
pub const AUTHOR_KEY: &str = "Author";

/// Every key in the Source vocabulary.
pub const KEYS: &[&str] = &[AGENCY_ID_KEY, AUTHOR_KEY];

/// Who produced a detection message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    /// Agency identifier (e.g. `US`). Required, non-empty.
    pub agency_id: Option<String>,
    /// Author within the agency. Required, non-empty.
    pub author: Option<String>,
}

#[derive(Deserialize)]
struct RequiredGroup {
    #[serde(rename = "AgencyID")]
    agency_id: String,
    #[serde(rename = "Author")]
    author: String,
}

impl Source {
    /// Creates a fully-populated source.
    pub fn new(agency_id: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            agency_id: Some(agency_id.into()),
            author: Some(author.into()),
        }
    }
}

impl Record for Source {
    const NAME: &'static str = "Source";

    fn fill_from_map(&mut self, map: &JsonMap) -> ConversionReport {
        let mut report = ConversionReport::new();
        match read_required_group::<RequiredGroup>(map, Self::NAME) {
            Ok(group) => {
                self.agency_id = Some(group.agency_id);
                self.author = Some(group.author);
            }
            Err(err) => {
                tracing::warn!(record = Self::NAME, error = %err, "required group abandoned");
                report.push(err);
            }
        }
        report
    }

    fn to_map_with_report(&self) -> (JsonMap, ConversionReport) {
        let mut writer = MapWriter::new(Self::NAME);
        writer
            .required_str(AGENCY_ID_KEY, self.agency_id.as_deref())
            .required_str(AUTHOR_KEY, self.author.as_deref());
        writer.finish()
    }

    fn errors(&self) -> Vec<String> {
        Validator::new(Self::NAME)
            .non_empty(AGENCY_ID_KEY, self.agency_id.as_deref())
            .non_empty(AUTHOR_KEY, self.author.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_source_has_no_errors() {
        let source = Source::new("US", "TestAuthor");
        assert!(source.is_valid());
        assert_eq!(
            serde_json::Value::Object(source.to_map()),
            json!({"AgencyID": "US", "Author": "TestAuthor"})
        );
    }

    #[test]
    fn empty_source_reports_each_missing_field() {
        assert_eq!(
            Source::default().errors(),
            vec![
                "No AgencyID in Source Class.".to_string(),
                "No Author in Source Class.".to_string(),
            ]
        );
    }

    #[test]
    fn empty_strings_are_reported_separately_from_absence() {
        let source = Source::new("", "TestAuthor");
        assert_eq!(
            source.errors(),
            vec!["Empty AgencyID in Source Class.".to_string()]
        );
    }

    #[test]
    fn mistyped_author_leaves_group_untouched() {
        let mut source = Source::new("NC", "old");
        let report = source.fill_from_value(&json!({"AgencyID": "US", "Author": 7}));
        assert!(report.is_invalid());
        assert_eq!(source, Source::new("NC", "old"));
    }
}
