//! Custom Tera filters for documentation templates.

use std::collections::HashMap;

use tera::{Result, Value};

/// Prefix every line of a string, e.g. to indent a YAML block scalar.
///
/// `{{ description | prefixlines(prefix="  ") }}`
pub(crate) fn prefixlines(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("prefixlines filter expects a string"))?;
    let prefix = args
        .get("prefix")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("prefixlines filter requires a `prefix` string"))?;

    let prefixed = s
        .split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Value::String(prefixed))
}
