//! Parsing of the `extends` key.

use crate::{ComposeError, ComposeResult};

use serde_json::Value;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const EXTENDS_KEY: &str = "extends";

/// Remove the `extends` key from `value` and return the referenced paths in
/// declaration order.
///
/// Returns an empty list when the key is absent. Empty strings, empty lists
/// and non-string entries are rejected.
pub(super) fn take_extends(value: &mut Value, current_path: &Path) -> ComposeResult<Vec<PathBuf>> {
    let Some(raw) = value.as_object_mut().and_then(|map| map.remove(EXTENDS_KEY)) else {
        return Ok(Vec::new());
    };
    match raw {
        Value::String(base) => Ok(vec![non_empty_path(base, current_path)?]),
        Value::Array(entries) if entries.is_empty() => Err(ComposeError::file_io(
            current_path,
            ErrorKind::InvalidData,
            "'extends' list must name at least one file",
        )),
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| match entry {
                Value::String(base) => non_empty_path(base, current_path),
                other => Err(ComposeError::file_io(
                    current_path,
                    ErrorKind::InvalidData,
                    format!(
                        "'extends' entries must be strings, but found type: {}",
                        json_type(&other)
                    ),
                )),
            })
            .collect(),
        other => Err(ComposeError::file_io(
            current_path,
            ErrorKind::InvalidData,
            format!(
                "'extends' key must be a string or a list of strings, but found type: {}",
                json_type(&other)
            ),
        )),
    }
}

fn non_empty_path(base: String, current_path: &Path) -> ComposeResult<PathBuf> {
    if base.is_empty() {
        return Err(ComposeError::file_io(
            current_path,
            ErrorKind::InvalidData,
            "'extends' key must be a non-empty string",
        ));
    }
    Ok(PathBuf::from(base))
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
