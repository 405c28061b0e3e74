use crate::config::types::{OutputFormat, ValueType};
use crate::validation::Path;
use serde_json::Value;

/// Evaluate a directive against a target and convert the matches.
pub fn evaluate(directive: &str, target: &Value, value_type: ValueType) -> crate::Result<Vec<Value>> {
    let mut path = Path::new(directive)?;
    path.find(target)?;
    log::info!("{} matched {} value(s)", path, path.len());

    let values = match value_type {
        ValueType::Json => path.matches().to_vec(),
        ValueType::Int => path.as_i64()?.into_iter().map(Value::from).collect(),
        ValueType::String => path.as_string()?.into_iter().map(Value::from).collect(),
        ValueType::Bool => path.as_bool()?.into_iter().map(Value::from).collect(),
    };
    Ok(values)
}

/// Render values for the terminal.
pub fn render(values: &[Value], format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
        OutputFormat::Plain => Ok(values
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Evaluate and render in one step.
pub fn handle_eval(
    directive: &str,
    target: &Value,
    value_type: ValueType,
    format: OutputFormat,
) -> crate::Result<String> {
    let values = evaluate(directive, target, value_type)?;
    render(&values, format)
}
