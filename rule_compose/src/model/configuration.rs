//! Configuration and override block types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ComposeResult, ComposeResultExt};

use super::{FILES_KEY, OVERRIDES_KEY, RULES_KEY, RuleSetting};

/// A complete rule configuration.
///
/// A `rules` object decodes into [`Configuration::rules`] and an `overrides`
/// array into [`Configuration::overrides`]. Every other top-level key lands
/// in [`Configuration::extra`], and so does a `rules` or `overrides` entry of
/// any other shape, so decoding never rejects an object.
///
/// # Examples
///
/// ```
/// use rule_compose::{Configuration, OverrideBlock, Severity};
/// use serde_json::json;
///
/// let config = Configuration::new()
///     .with_rule("functional/no-let", Severity::Error)
///     .with_override(
///         OverrideBlock::new(["*.ts"]).with_rule("functional/prefer-readonly-type", "warn"),
///     );
///
/// assert_eq!(
///     config.to_value(),
///     json!({
///         "rules": {"functional/no-let": "error"},
///         "overrides": [
///             {"files": ["*.ts"], "rules": {"functional/prefer-readonly-type": "warn"}}
///         ]
///     })
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Configuration {
    /// Rule identifier to rule setting.
    pub rules: Map<String, Value>,
    /// File-scoped rule deltas, in application order.
    pub overrides: Vec<OverrideBlock>,
    /// Every other top-level key.
    pub extra: Map<String, Value>,
}

impl Configuration {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a configuration from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComposeError::Decode`] when the value is not an
    /// object.
    pub fn from_value(value: Value) -> ComposeResult<Self> {
        serde_json::from_value(value).into_compose()
    }

    /// Encode the configuration as a JSON object.
    ///
    /// Empty `rules` and `overrides` are omitted. A non-empty typed section
    /// takes precedence over an entry of the same name in `extra`.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut root = self.extra.clone();
        if !self.rules.is_empty() {
            root.insert(RULES_KEY.to_owned(), Value::Object(self.rules.clone()));
        }
        if !self.overrides.is_empty() {
            let blocks = self.overrides.iter().map(OverrideBlock::to_value).collect();
            root.insert(OVERRIDES_KEY.to_owned(), Value::Array(blocks));
        }
        root
    }

    /// Encode the configuration as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Set `id` to `setting`, replacing any previous value.
    #[must_use]
    pub fn with_rule(mut self, id: impl Into<String>, setting: impl Into<Value>) -> Self {
        self.rules.insert(id.into(), setting.into());
        self
    }

    /// Append an override block.
    #[must_use]
    pub fn with_override(mut self, block: OverrideBlock) -> Self {
        self.overrides.push(block);
        self
    }

    /// Set an auxiliary top-level key.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the typed view of the setting for `id`, if it parses.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<RuleSetting> {
        self.rules.get(id).and_then(RuleSetting::parse)
    }

    /// Returns `true` when the configuration holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.overrides.is_empty() && self.extra.is_empty()
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(mut root: Map<String, Value>) -> Self {
        let rules = match root.remove(RULES_KEY) {
            Some(Value::Object(rules)) => rules,
            Some(other) => {
                root.insert(RULES_KEY.to_owned(), other);
                Map::new()
            }
            None => Map::new(),
        };
        let overrides = match root.remove(OVERRIDES_KEY) {
            Some(Value::Array(blocks)) => blocks.into_iter().map(OverrideBlock::from).collect(),
            Some(other) => {
                root.insert(OVERRIDES_KEY.to_owned(), other);
                Vec::new()
            }
            None => Vec::new(),
        };
        Self {
            rules,
            overrides,
            extra: root,
        }
    }
}

impl From<Configuration> for Map<String, Value> {
    fn from(configuration: Configuration) -> Self {
        configuration.to_map()
    }
}

/// Rule deltas scoped to a set of file patterns.
///
/// A block is held exactly as it was written: `files` may be a single glob
/// or a list, keys such as `excludedFiles` sit beside `rules`, and even a
/// block that is not an object is carried through. The accessors offer a
/// read-only view; nothing in this crate interprets the globs.
///
/// ```
/// use rule_compose::OverrideBlock;
/// use serde_json::json;
///
/// let block = OverrideBlock::from(json!({"files": "*.ts", "rules": {"no-let": "off"}}));
/// assert_eq!(block.globs(), vec!["*.ts"]);
/// assert!(block.rule("no-let").is_some_and(|setting| setting.is_off()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideBlock(Value);

impl Default for OverrideBlock {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl OverrideBlock {
    /// Create a block scoped to `files`.
    #[must_use]
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files = files.into_iter().map(|glob| Value::String(glob.into())).collect();
        let mut block = Map::new();
        block.insert(FILES_KEY.to_owned(), Value::Array(files));
        Self(Value::Object(block))
    }

    /// Set `id` to `setting` within this block.
    ///
    /// A block that is not an object, or whose `rules` entry is not an
    /// object, has that part replaced by an object first.
    #[must_use]
    pub fn with_rule(self, id: impl Into<String>, setting: impl Into<Value>) -> Self {
        let mut block = into_object(self.0);
        let mut rules = into_object(block.remove(RULES_KEY).unwrap_or_default());
        rules.insert(id.into(), setting.into());
        block.insert(RULES_KEY.to_owned(), Value::Object(rules));
        Self(Value::Object(block))
    }

    /// Returns the raw `files` entry.
    #[must_use]
    pub fn files(&self) -> Option<&Value> {
        self.get(FILES_KEY)
    }

    /// Returns the glob strings named by `files`.
    ///
    /// A single string yields one glob; in a list, entries that are not
    /// strings are skipped.
    #[must_use]
    pub fn globs(&self) -> Vec<&str> {
        match self.files() {
            Some(Value::String(glob)) => vec![glob.as_str()],
            Some(Value::Array(entries)) => entries.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the block's rule map, when `rules` is an object.
    #[must_use]
    pub fn rules(&self) -> Option<&Map<String, Value>> {
        self.get(RULES_KEY).and_then(Value::as_object)
    }

    /// Returns the typed view of the setting for `id`, if it parses.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<RuleSetting> {
        self.rules()
            .and_then(|rules| rules.get(id))
            .and_then(RuleSetting::parse)
    }

    /// Returns the value stored under `key`, when the block is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the block as written.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the block, returning it as written.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Encode the block as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.0.clone()
    }
}

impl From<Value> for OverrideBlock {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<OverrideBlock> for Value {
    fn from(block: OverrideBlock) -> Self {
        block.0
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
