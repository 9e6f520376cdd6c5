//! Validate command implementation.

use detection_schemas::MessageKind;

use crate::{input, output};

pub fn run(
    input: Option<String>,
    kind: Option<MessageKind>,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (message, report) = input::load_message(input, kind)?;
    let valid = message.is_valid() && !report.is_invalid();

    if json_output {
        println!(
            "{}",
            output::format_json(&output::validation_json(&message, &report))
        );
    } else {
        for line in output::validation_lines(&message, &report) {
            println!("{}", line);
        }
    }

    if strict && !valid {
        std::process::exit(1);
    }

    Ok(())
}
