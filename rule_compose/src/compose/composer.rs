//! Builder that folds configuration layers into one.

use tracing::debug;

use crate::file::ConfigChain;
use crate::merge::MergePolicy;
use crate::model::Configuration;

use super::{ConfigLayer, compose_with};

/// Accumulates [`ConfigLayer`]s and folds them left to right.
///
/// The first layer acts as the base and each later layer is composed over
/// the running result, so later layers win on conflict and their override
/// blocks land after earlier ones.
///
/// ```rust
/// use rule_compose::{Composer, Configuration, MergePolicy, OverrideBlock};
/// use serde_json::json;
///
/// let mut composer = Composer::new().with_policy(MergePolicy::keyed());
/// composer.push_preset(
///     "functional",
///     Configuration::new()
///         .with_rule("functional/immutable-data", json!(["error", {"ignorePattern": ["^mutable"]}]))
///         .with_override(OverrideBlock::new(["*.js"])),
/// );
/// composer.push_inline(
///     Configuration::new()
///         .with_rule("functional/immutable-data", json!(["error", {"ignoreClass": "fieldsOnly"}]))
///         .with_override(OverrideBlock::new(["*.ts"])),
/// );
///
/// let resolved = composer.compose();
/// assert_eq!(
///     resolved.rules["functional/immutable-data"],
///     json!(["error", {"ignorePattern": ["^mutable"], "ignoreClass": "fieldsOnly"}])
/// );
/// assert_eq!(resolved.overrides[1].globs(), vec!["*.ts"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Composer {
    layers: Vec<ConfigLayer>,
    policy: MergePolicy,
}

impl Composer {
    /// Create an empty composer using the default policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layers: Vec::new(),
            policy: MergePolicy::replace(),
        }
    }

    /// Select the policy used for rules defined by more than one layer.
    #[must_use]
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active merge policy.
    #[must_use]
    pub const fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Push a named preset layer.
    pub fn push_preset(&mut self, name: impl Into<String>, configuration: Configuration) {
        self.push_layer(ConfigLayer::preset(name, configuration));
    }

    /// Push a caller-supplied layer.
    pub fn push_inline(&mut self, configuration: Configuration) {
        self.push_layer(ConfigLayer::inline(configuration));
    }

    /// Push every file of an `extends` chain, ancestor first.
    pub fn push_chain(&mut self, chain: ConfigChain) {
        self.layers.extend(chain.into_layers());
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: ConfigLayer) {
        self.layers.push(layer);
    }

    /// Returns the accumulated layers in fold order.
    #[must_use]
    pub fn layers(&self) -> &[ConfigLayer] {
        &self.layers
    }

    /// Returns `true` when no layers have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Fold all layers into a single configuration.
    ///
    /// Returns an empty configuration when no layers were pushed.
    #[must_use]
    pub fn compose(&self) -> Configuration {
        self.layers
            .iter()
            .fold(Configuration::default(), |resolved, layer| {
                debug!(
                    source = %layer.source(),
                    rules = layer.configuration().rules.len(),
                    overrides = layer.configuration().overrides.len(),
                    "composing configuration layer"
                );
                compose_with(&resolved, layer.configuration(), &self.policy)
            })
    }
}

impl IntoIterator for Composer {
    type Item = ConfigLayer;
    type IntoIter = std::vec::IntoIter<ConfigLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
