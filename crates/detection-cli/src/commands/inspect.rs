//! Inspect command implementation.

use detection_schemas::MessageKind;

use crate::{input, output};

pub fn run(input: Option<String>, kind: Option<MessageKind>) -> Result<(), Box<dyn std::error::Error>> {
    let (message, _report) = input::load_message(input, kind)?;

    println!("{}", output::format_json(&message.to_value()));
    println!("{:<16} {}", "KEY", "STATE");
    println!("{}", "-".repeat(24));
    for line in output::presence_lines(&message) {
        println!("{}", line);
    }
    Ok(())
}
