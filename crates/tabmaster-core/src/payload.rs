//! Command batch decoding
//!
//! A batch arrives either as a JSON array of strings or as plain text with
//! one command per line.

use serde_json::Value;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Decode a JSON payload. Anything other than an array of strings is rejected.
pub fn decode_payload(json: &str, config: &Config) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(CoreError::InvalidPayload(
            "Commands must be an array".to_string(),
        ));
    };

    let commands = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(command) => Ok(command),
            other => Err(CoreError::InvalidPayload(format!(
                "Command at index {} is not a string: {}",
                index, other
            ))),
        })
        .collect::<Result<Vec<String>>>()?;

    check_limit(commands, config)
}

/// Split plain text into commands, one per non-blank line
pub fn decode_lines(text: &str, config: &Config) -> Result<Vec<String>> {
    let commands = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    check_limit(commands, config)
}

fn check_limit(commands: Vec<String>, config: &Config) -> Result<Vec<String>> {
    match config.max_commands {
        Some(max) if commands.len() > max => Err(CoreError::InvalidPayload(format!(
            "Batch of {} commands exceeds the limit of {}",
            commands.len(),
            max
        ))),
        _ => Ok(commands),
    }
}
