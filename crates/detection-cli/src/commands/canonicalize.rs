//! Canonicalize command implementation.

use detection_schemas::MessageKind;

use crate::input;

pub fn run(input: Option<String>, kind: Option<MessageKind>) -> Result<(), Box<dyn std::error::Error>> {
    let (message, report) = input::load_message(input, kind)?;

    if report.is_invalid() {
        return Err(format!(
            "{} could not be read: {}",
            message.kind(),
            report.messages().join("; ")
        )
        .into());
    }

    println!("{}", message.to_json_string());
    Ok(())
}
