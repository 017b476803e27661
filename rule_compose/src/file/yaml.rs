//! YAML parsing backed by `serde-saphyr`.

use crate::{ComposeError, ComposeResult};

use serde_json::Value;
use serde_saphyr::Options;

use std::path::Path;

/// Parse YAML contents into a JSON value using strict boolean semantics, so
/// `yes`/`no` stay strings.
pub(super) fn parse_yaml(path: &Path, data: &str) -> ComposeResult<Value> {
    serde_saphyr::from_str_with_options(
        data,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|e| ComposeError::file(path, e))
}
