//! Key-wise merge dispatcher for JSON configuration trees.
//!
//! The dispatcher never fails and never mutates its inputs. Per key it
//! applies one of three policies:
//!
//! - both sides are objects: recurse and take the union of keys;
//! - the key exists on one side only: copy that side through;
//! - anything else (arrays, scalars, `null`, mismatched shapes): the patch
//!   value replaces the base value wholesale.
//!
//! Arrays are never concatenated or merged element-wise. A `null` in the
//! patch is an ordinary value and does not delete the key.

mod policy;

pub use policy::{MergePolicy, OptionsMerge};

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// Merge `patch` over `base`, returning a new value.
///
/// # Examples
///
/// ```rust
/// use rule_compose::merge_values;
/// use serde_json::json;
///
/// let base = json!({"a": 1, "nested": {"x": 1, "list": [1, 2]}});
/// let patch = json!({"nested": {"y": 2, "list": [3]}, "b": null});
/// assert_eq!(
///     merge_values(&base, &patch),
///     json!({"a": 1, "b": null, "nested": {"x": 1, "y": 2, "list": [3]}})
/// );
/// ```
#[must_use]
pub fn merge_values(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            Value::Object(merge_maps(base_map, patch_map))
        }
        (_, replacement) => replacement.clone(),
    }
}

/// Merge two objects key by key.
///
/// The result holds the union of keys; keys present on both sides are
/// resolved with [`merge_values`].
#[must_use]
pub fn merge_maps(base: &Map<String, Value>, patch: &Map<String, Value>) -> Map<String, Value> {
    let keys: BTreeSet<&String> = base.keys().chain(patch.keys()).collect();
    keys.into_iter()
        .filter_map(|key| {
            merge_optional(base.get(key), patch.get(key)).map(|value| (key.clone(), value))
        })
        .collect()
}

/// Merge two optionally present values.
///
/// Returns `None` only when both sides are absent.
#[must_use]
pub fn merge_optional(base: Option<&Value>, patch: Option<&Value>) -> Option<Value> {
    match (base, patch) {
        (Some(base_value), Some(patch_value)) => Some(merge_values(base_value, patch_value)),
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (None, None) => None,
    }
}
