//! Output formatting utilities.

use detection_canonical::ConversionReport;
use detection_schemas::Message;
use serde_json::{json, Value};

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Builds the machine-readable validation summary.
pub fn validation_json(message: &Message, report: &ConversionReport) -> Value {
    let errors = message.errors();
    json!({
        "kind": message.kind().as_str(),
        "valid": errors.is_empty() && !report.is_invalid(),
        "conversion": report,
        "errors": errors,
    })
}

/// One line per diagnostic and validation error.
pub fn validation_lines(message: &Message, report: &ConversionReport) -> Vec<String> {
    let errors = message.errors();
    let mut lines = vec![format!(
        "{:<12} conversion={:?} errors={}",
        message.kind().as_str(),
        report.status,
        errors.len()
    )];
    lines.extend(report.messages().into_iter().map(|m| format!("  conversion: {}", m)));
    lines.extend(errors.into_iter().map(|e| format!("  invalid:    {}", e)));
    lines
}

/// Present/absent summary for every key in the record's vocabulary.
pub fn presence_lines(message: &Message) -> Vec<String> {
    let value = message.to_value();
    message
        .kind()
        .keys()
        .iter()
        .map(|key| {
            let state = if value.get(*key).is_some() {
                "present"
            } else {
                "absent"
            };
            format!("{:<16} {}", key, state)
        })
        .collect()
}
