//! Configuration composition.
//!
//! [`compose`] merges a patch configuration over a base: rules merge key by
//! key, override blocks concatenate, and every other top-level key goes
//! through the generic dispatcher. [`Composer`] folds any number of layers
//! the same way.

mod composer;
mod layer;

pub use composer::Composer;
pub use layer::{ConfigLayer, LayerSource};

use serde_json::{Map, Value};

use crate::merge::{MergePolicy, merge_maps, merge_values};
use crate::model::{Configuration, OVERRIDES_KEY, RULES_KEY};
use crate::overrides::concat_override_values;

/// Compose `patch` over `base` with the default [`MergePolicy`].
///
/// # Examples
///
/// ```rust
/// use rule_compose::{Configuration, OverrideBlock, compose};
///
/// let base = Configuration::new()
///     .with_rule("functional/no-let", "error")
///     .with_rule("functional/no-try-statement", "error");
/// let patch = Configuration::new()
///     .with_rule("functional/no-try-statement", "off")
///     .with_override(OverrideBlock::new(["*.ts"]));
///
/// let resolved = compose(&base, &patch);
/// assert_eq!(resolved.rules["functional/no-let"], "error");
/// assert_eq!(resolved.rules["functional/no-try-statement"], "off");
/// assert_eq!(resolved.overrides.len(), 1);
/// ```
#[must_use]
pub fn compose(base: &Configuration, patch: &Configuration) -> Configuration {
    compose_with(base, patch, &MergePolicy::default())
}

/// Compose `patch` over `base` using `policy` for rules defined on both
/// sides.
///
/// The result is the typed form of [`compose_values`] over the two encoded
/// configurations, so sections decoded into `extra` because of an unusual
/// shape resolve exactly as they would untyped.
#[must_use]
pub fn compose_with(
    base: &Configuration,
    patch: &Configuration,
    policy: &MergePolicy,
) -> Configuration {
    Configuration::from(compose_maps(&base.to_map(), &patch.to_map(), policy))
}

/// Compose two raw configuration documents.
///
/// Total over any JSON input. When both roots are objects, `rules` objects
/// merge under `policy` and `overrides` arrays concatenate; when either
/// side has an unexpected shape for those keys the generic dispatcher
/// decides. Non-object roots resolve through the dispatcher as well.
///
/// The untyped form is exact: a key present in the patch always appears in
/// the result, including an empty `rules` object or `overrides` array. The
/// empty document `{}` is therefore an identity on either side, while
/// `{"rules": {}, "overrides": []}` is one only up to those empty sections,
/// which [`Configuration`] treats as absent.
///
/// # Examples
///
/// ```rust
/// use rule_compose::{MergePolicy, compose_values};
/// use serde_json::json;
///
/// let merged = compose_values(
///     &json!({"overrides": [{"files": ["*.js"]}], "env": {"node": true}}),
///     &json!({"overrides": [{"files": ["*.ts"]}], "env": {"es6": true}}),
///     &MergePolicy::default(),
/// );
/// assert_eq!(
///     merged,
///     json!({
///         "overrides": [{"files": ["*.js"]}, {"files": ["*.ts"]}],
///         "env": {"node": true, "es6": true}
///     })
/// );
/// ```
#[must_use]
pub fn compose_values(base: &Value, patch: &Value, policy: &MergePolicy) -> Value {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            Value::Object(compose_maps(base_map, patch_map, policy))
        }
        _ => merge_values(base, patch),
    }
}

fn compose_maps(
    base: &Map<String, Value>,
    patch: &Map<String, Value>,
    policy: &MergePolicy,
) -> Map<String, Value> {
    let mut merged = merge_maps(base, patch);
    if let (Some(Value::Object(base_rules)), Some(Value::Object(patch_rules))) =
        (base.get(RULES_KEY), patch.get(RULES_KEY))
    {
        let rules = policy.merge_rules(base_rules, patch_rules);
        merged.insert(RULES_KEY.to_owned(), Value::Object(rules));
    }
    if let (Some(Value::Array(base_blocks)), Some(Value::Array(patch_blocks))) =
        (base.get(OVERRIDES_KEY), patch.get(OVERRIDES_KEY))
    {
        let blocks = concat_override_values(base_blocks, patch_blocks);
        merged.insert(OVERRIDES_KEY.to_owned(), Value::Array(blocks));
    }
    merged
}
