//! Format-specific parsing utilities for configuration files.

use crate::{ComposeError, ComposeResult};

use serde_json::Value;

use std::io::ErrorKind;
use std::path::Path;

#[cfg(feature = "yaml")]
use super::yaml::parse_yaml;

/// Parse configuration data according to the file extension.
///
/// `.json` is always supported. `.json5`, `.yaml`/`.yml` and TOML (every
/// other extension) need the `json5`, `yaml` and `toml` features. The
/// document root must be a table.
///
/// # Errors
///
/// Returns a [`crate::ComposeError::File`] if the contents fail to parse, the
/// root is not a table, or the required feature is disabled.
pub(super) fn parse_config_by_format(path: &Path, data: &str) -> ComposeResult<Value> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let value: Value = match ext.as_deref() {
        Some("json") => serde_json::from_str(data).map_err(|e| ComposeError::file(path, e))?,
        Some("json5") => parse_json5(path, data)?,
        Some("yaml" | "yml") => {
            #[cfg(feature = "yaml")]
            {
                parse_yaml(path, data)?
            }
            #[cfg(not(feature = "yaml"))]
            {
                return Err(feature_disabled(path, "yaml"));
            }
        }
        _ => parse_toml(path, data)?,
    };

    if !value.is_object() {
        return Err(ComposeError::file_io(
            path,
            ErrorKind::InvalidData,
            "configuration root must be a table",
        ));
    }
    Ok(value)
}

#[cfg(feature = "json5")]
fn parse_json5(path: &Path, data: &str) -> ComposeResult<Value> {
    json5::from_str(data).map_err(|e| ComposeError::file(path, e))
}

#[cfg(not(feature = "json5"))]
fn parse_json5(path: &Path, _data: &str) -> ComposeResult<Value> {
    Err(feature_disabled(path, "json5"))
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Path, data: &str) -> ComposeResult<Value> {
    toml::from_str(data).map_err(|e| ComposeError::file(path, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Path, _data: &str) -> ComposeResult<Value> {
    Err(feature_disabled(path, "toml"))
}

#[cfg_attr(
    all(feature = "json5", feature = "yaml", feature = "toml"),
    expect(dead_code, reason = "every optional format is enabled")
)]
fn feature_disabled(path: &Path, feature: &str) -> std::sync::Arc<ComposeError> {
    ComposeError::file_io(
        path,
        ErrorKind::Unsupported,
        format!("{feature} feature disabled: enable the '{feature}' feature to support this file format"),
    )
}
