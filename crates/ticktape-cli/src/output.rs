use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Result of one command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutput {
    pub command: &'static str,
    pub data: Value,
}

impl CommandOutput {
    pub fn new(command: &'static str, data: Value) -> Self {
        Self { command, data }
    }
}

pub fn render(
    output: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    print!("{}", to_text(output, format, pretty)?);
    Ok(())
}

pub fn to_text(
    output: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    let text = match format {
        OutputFormat::Json if pretty => format!("{}\n", serde_json::to_string_pretty(output)?),
        OutputFormat::Json => format!("{}\n", serde_json::to_string(output)?),
        OutputFormat::Table => table(output)?,
    };
    Ok(text)
}

fn table(output: &CommandOutput) -> Result<String, CliError> {
    let mut lines = vec![format!("command: {}", output.command)];

    match &output.data {
        Value::Object(fields) => {
            let width = fields.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in fields {
                lines.push(format!("{key:<width$} : {}", cell(value)?));
            }
        }
        Value::Array(rows) => {
            for (index, row) in rows.iter().enumerate() {
                lines.push(format!("[{index}] {}", cell(row)?));
            }
        }
        other => lines.push(cell(other)?),
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

fn cell(value: &Value) -> Result<String, CliError> {
    let text = match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value)?,
    };
    Ok(text)
}
