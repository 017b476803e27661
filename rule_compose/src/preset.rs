//! Named rule-set presets.
//!
//! Presets are plain data. A derived preset is defined as another preset with
//! a patch composed over it, which is how lighter variants of a rule set are
//! usually published.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::compose::{ConfigLayer, compose_with};
use crate::merge::MergePolicy;
use crate::model::Configuration;
use crate::{ComposeError, ComposeResult};

#[derive(Clone, Debug)]
enum PresetDefinition {
    Standalone(Configuration),
    Derived { base: String, patch: Configuration },
}

/// Registry of named configurations.
///
/// # Examples
///
/// ```rust
/// use rule_compose::{Configuration, PresetRegistry};
///
/// let mut registry = PresetRegistry::new();
/// registry.register(
///     "functional",
///     Configuration::new()
///         .with_rule("functional/no-let", "error")
///         .with_rule("functional/no-try-statement", "error"),
/// );
/// registry.register_derived(
///     "functional-lite",
///     "functional",
///     Configuration::new().with_rule("functional/no-try-statement", "off"),
/// );
///
/// let lite = registry.resolve("functional-lite")?;
/// assert_eq!(lite.rules["functional/no-let"], "error");
/// assert_eq!(lite.rules["functional/no-try-statement"], "off");
/// # Ok::<_, std::sync::Arc<rule_compose::ComposeError>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<String, PresetDefinition>,
    policy: MergePolicy,
}

impl PresetRegistry {
    /// Create an empty registry using the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the policy used when resolving derived presets.
    #[must_use]
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a standalone preset, replacing any preset of the same name.
    pub fn register(&mut self, name: impl Into<String>, configuration: Configuration) {
        self.presets
            .insert(name.into(), PresetDefinition::Standalone(configuration));
    }

    /// Register a preset defined as `patch` composed over the preset named
    /// `base`.
    ///
    /// The base does not need to exist yet; it is looked up on resolution.
    pub fn register_derived(
        &mut self,
        name: impl Into<String>,
        base: impl Into<String>,
        patch: Configuration,
    ) {
        self.presets.insert(
            name.into(),
            PresetDefinition::Derived {
                base: base.into(),
                patch,
            },
        );
    }

    /// Returns `true` when a preset named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Iterate registered preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Resolve `name`, composing derived presets over their bases.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UnknownPreset`] when `name` or one of its bases
    /// is not registered, and [`ComposeError::CyclicExtends`] when a chain of
    /// derived presets refers back to itself.
    pub fn resolve(&self, name: &str) -> ComposeResult<Configuration> {
        let mut stack = Vec::new();
        self.resolve_inner(name, &mut stack)
    }

    /// Resolve `name` and wrap it as a preset [`ConfigLayer`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`PresetRegistry::resolve`].
    pub fn layer(&self, name: &str) -> ComposeResult<ConfigLayer> {
        self.resolve(name)
            .map(|configuration| ConfigLayer::preset(name, configuration))
    }

    fn resolve_inner(&self, name: &str, stack: &mut Vec<String>) -> ComposeResult<Configuration> {
        if stack.iter().any(|seen| seen == name) {
            let mut cycle = stack.clone();
            cycle.push(name.to_owned());
            return Err(Arc::new(ComposeError::CyclicExtends {
                cycle: cycle.join(" -> "),
            }));
        }
        let definition = self.presets.get(name).ok_or_else(|| {
            Arc::new(ComposeError::UnknownPreset {
                name: name.to_owned(),
            })
        })?;
        match definition {
            PresetDefinition::Standalone(configuration) => Ok(configuration.clone()),
            PresetDefinition::Derived { base, patch } => {
                stack.push(name.to_owned());
                let resolved_base = self.resolve_inner(base, stack)?;
                stack.pop();
                debug!(preset = name, base = base.as_str(), "composing derived preset");
                Ok(compose_with(&resolved_base, patch, &self.policy))
            }
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::PresetRegistry;
    use crate::ComposeError;
    use crate::compose::LayerSource;
    use crate::merge::MergePolicy;
    use crate::model::{Configuration, OverrideBlock};

    #[fixture]
    fn registry() -> PresetRegistry {
        let mut registry = PresetRegistry::new();
        registry.register(
            "functional",
            Configuration::new()
                .with_rule("functional/immutable-data", json!(["error", {"ignorePattern": ["^mutable"]}]))
                .with_rule("functional/no-expression-statement", "error")
                .with_override(OverrideBlock::new(["*.js"])),
        );
        registry.register_derived(
            "functional-lite",
            "functional",
            Configuration::new()
                .with_rule("functional/immutable-data", json!(["error", {"ignoreClass": "fieldsOnly"}]))
                .with_rule("functional/no-expression-statement", "off")
                .with_override(OverrideBlock::new(["*.ts", "*.tsx"])),
        );
        registry.register_derived(
            "functional-lite-strict-ts",
            "functional-lite",
            Configuration::new().with_rule("functional/no-expression-statement", "warn"),
        );
        registry
    }

    #[rstest]
    fn derived_presets_compose_over_their_base(registry: PresetRegistry) {
        let lite = registry.resolve("functional-lite").expect("lite resolves");
        assert_eq!(
            lite.rules.get("functional/immutable-data"),
            Some(&json!(["error", {"ignoreClass": "fieldsOnly"}]))
        );
        assert_eq!(
            lite.rules.get("functional/no-expression-statement"),
            Some(&json!("off"))
        );
        assert_eq!(lite.overrides.len(), 2);
    }

    #[rstest]
    fn chains_resolve_base_first(registry: PresetRegistry) {
        let strict = registry
            .resolve("functional-lite-strict-ts")
            .expect("chain resolves");
        assert_eq!(
            strict.rules.get("functional/no-expression-statement"),
            Some(&json!("warn"))
        );
        assert_eq!(strict.overrides.len(), 2);
    }

    #[rstest]
    fn keyed_registry_merges_options(registry: PresetRegistry) {
        let lite = registry
            .with_policy(MergePolicy::keyed())
            .resolve("functional-lite")
            .expect("lite resolves");
        assert_eq!(
            lite.rules.get("functional/immutable-data"),
            Some(&json!(["error", {"ignorePattern": ["^mutable"], "ignoreClass": "fieldsOnly"}]))
        );
    }

    #[rstest]
    fn unknown_presets_are_reported(registry: PresetRegistry) {
        let err = registry.resolve("missing").expect_err("missing preset");
        assert!(matches!(&*err, ComposeError::UnknownPreset { name } if name == "missing"));
    }

    #[rstest]
    fn missing_bases_are_reported(mut registry: PresetRegistry) {
        registry.register_derived("orphan", "nowhere", Configuration::new());
        let err = registry.resolve("orphan").expect_err("missing base");
        assert!(matches!(&*err, ComposeError::UnknownPreset { name } if name == "nowhere"));
    }

    #[rstest]
    fn cycles_are_reported(mut registry: PresetRegistry) {
        registry.register_derived("a", "b", Configuration::new());
        registry.register_derived("b", "a", Configuration::new());
        let err = registry.resolve("a").expect_err("cycle");
        assert!(matches!(&*err, ComposeError::CyclicExtends { cycle } if cycle == "a -> b -> a"));
    }

    #[rstest]
    fn names_are_sorted_and_layers_carry_provenance(registry: PresetRegistry) {
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec!["functional", "functional-lite", "functional-lite-strict-ts"]
        );
        assert!(registry.contains("functional"));
        let layer = registry.layer("functional").expect("layer");
        assert_eq!(
            layer.source(),
            &LayerSource::Preset(String::from("functional"))
        );
    }
}
