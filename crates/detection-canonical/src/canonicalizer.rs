use canonical_json::to_string;
use serde_json::Value;

/// Error returned when canonical rendering fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The canonical JSON encoder rejected the value.
    #[error("canonical encoding failed: {0}")]
    Encoding(String),
}

/// Renders a JSON value with RFC 8785 key ordering and number formatting.
pub fn to_canonical_string(value: &Value) -> Result<String, CanonicalizationError> {
    to_string(value).map_err(|err| CanonicalizationError::Encoding(err.to_string()))
}

/// Renders a JSON value canonically, falling back to plain `serde_json`
/// output if the canonical encoder rejects it.
pub fn render(value: &Value) -> String {
    match to_canonical_string(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to non-canonical JSON rendering");
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_ordered() {
        let value = json!({"Type": "Retract", "ID": "abc", "Source": {"Author": "x", "AgencyID": "US"}});
        let text = to_canonical_string(&value).unwrap();
        assert_eq!(
            text,
            r#"{"ID":"abc","Source":{"AgencyID":"US","Author":"x"},"Type":"Retract"}"#
        );
    }

    #[test]
    fn render_matches_canonical_output() {
        let value = json!({"b": "1", "a": "2"});
        assert_eq!(render(&value), r#"{"a":"2","b":"1"}"#);
    }
}
