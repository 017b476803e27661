//! Merge policy for rule settings present on both sides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::ParseKeywordError;

use super::merge_values;

/// How `[severity, ...options]` rule settings combine when both sides
/// define the same rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsMerge {
    /// The patch array replaces the base array wholesale.
    #[default]
    Replace,
    /// Severity and length come from the patch; option objects at the same
    /// position on both sides are deep-merged.
    Keyed,
}

impl OptionsMerge {
    /// Returns the keyword used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Keyed => "keyed",
        }
    }
}

impl FromStr for OptionsMerge {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "keyed" => Ok(Self::Keyed),
            _ => Err(ParseKeywordError::new("replace, keyed", s)),
        }
    }
}

impl fmt::Display for OptionsMerge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunables for composing configurations.
///
/// # Examples
///
/// ```rust
/// use rule_compose::{MergePolicy, OptionsMerge};
/// use serde_json::json;
///
/// let base = json!(["error", {"x": 1, "y": 2}]);
/// let patch = json!(["warn", {"y": 3, "z": 4}]);
///
/// assert_eq!(MergePolicy::default().merge_rule(&base, &patch), patch);
/// assert_eq!(
///     MergePolicy::keyed().merge_rule(&base, &patch),
///     json!(["warn", {"x": 1, "y": 3, "z": 4}])
/// );
/// assert_eq!(MergePolicy::keyed().options, OptionsMerge::Keyed);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    /// Strategy for rule option arrays.
    pub options: OptionsMerge,
}

impl MergePolicy {
    /// Policy replacing rule arrays wholesale (the default).
    #[must_use]
    pub const fn replace() -> Self {
        Self {
            options: OptionsMerge::Replace,
        }
    }

    /// Policy merging option objects position by position.
    #[must_use]
    pub const fn keyed() -> Self {
        Self {
            options: OptionsMerge::Keyed,
        }
    }

    /// Merge a single rule setting defined on both sides.
    #[must_use]
    pub fn merge_rule(&self, base: &Value, patch: &Value) -> Value {
        match (self.options, base, patch) {
            (OptionsMerge::Keyed, Value::Array(base_items), Value::Array(patch_items)) => {
                Value::Array(merge_positional(base_items, patch_items))
            }
            _ => merge_values(base, patch),
        }
    }

    /// Merge two rule maps, applying [`MergePolicy::merge_rule`] to rules
    /// present on both sides.
    #[must_use]
    pub fn merge_rules(
        &self,
        base: &Map<String, Value>,
        patch: &Map<String, Value>,
    ) -> Map<String, Value> {
        let mut merged = base.clone();
        for (id, patch_setting) in patch {
            let resolved = match base.get(id) {
                Some(base_setting) => self.merge_rule(base_setting, patch_setting),
                None => patch_setting.clone(),
            };
            merged.insert(id.clone(), resolved);
        }
        merged
    }
}

/// The leading severity always comes from the patch; later positions merge
/// objects and otherwise take the patch element. Base elements past the end
/// of the patch are dropped.
fn merge_positional(base: &[Value], patch: &[Value]) -> Vec<Value> {
    patch
        .iter()
        .enumerate()
        .map(|(index, patch_item)| match base.get(index) {
            Some(base_item) if index > 0 => merge_values(base_item, patch_item),
            _ => patch_item.clone(),
        })
        .collect()
}
