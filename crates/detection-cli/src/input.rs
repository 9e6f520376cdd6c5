//! Input loading shared by all commands.

use detection_canonical::ConversionReport;
use detection_schemas::{Message, MessageKind};
use std::io::{self, Read};

/// Reads JSON text from a file, or stdin when no path is given.
pub fn read_text(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        Ok(std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?)
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Reads and parses a message of `kind` (detected when `None`).
pub fn load_message(
    input: Option<String>,
    kind: Option<MessageKind>,
) -> Result<(Message, ConversionReport), Box<dyn std::error::Error>> {
    let text = read_text(input)?;
    let parsed = Message::parse(kind, &text).ok_or(
        "Could not detect message kind; pass --kind hypocenter|source|retract",
    )?;
    tracing::debug!(kind = %parsed.0.kind(), status = ?parsed.1.status, "message loaded");
    Ok(parsed)
}
