//! Runtime loading entrypoints for configuration files and extends chains.

use camino::Utf8PathBuf;
use tracing::debug;

use crate::{ComposeError, ComposeResult};
use crate::compose::{Composer, ConfigLayer};
use crate::merge::MergePolicy;
use crate::model::Configuration;

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::extends::take_extends;
use super::parser::parse_config_by_format;
use super::path::{canonicalise, normalise_cycle_key, resolve_base_path};

/// Configurations from a file inheritance chain, ordered ancestor-first.
///
/// Each file is kept as its own [`ConfigLayer`] so callers can inspect
/// provenance or fold the chain under a policy of their choosing. With
/// `extends = ["a.toml", "b.toml"]` the chain holds the layers of `a.toml`,
/// then those of `b.toml`, then the extending file itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigChain {
    layers: Vec<ConfigLayer>,
}

impl ConfigChain {
    /// Returns the layers, ancestor-first.
    #[must_use]
    pub fn layers(&self) -> &[ConfigLayer] {
        &self.layers
    }

    /// Consume the chain, returning its layers.
    #[must_use]
    pub fn into_layers(self) -> Vec<ConfigLayer> {
        self.layers
    }

    /// Returns the number of files in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when the chain holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Fold the chain into one configuration under `policy`.
    #[must_use]
    pub fn compose(self, policy: MergePolicy) -> Configuration {
        let mut composer = Composer::new().with_policy(policy);
        composer.push_chain(self);
        composer.compose()
    }
}

/// Convert a canonical path to a UTF-8 path, falling back to lossy conversion.
fn to_utf8_path(canonical: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(canonical.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

/// Load a configuration file, resolving `extends` with the default policy.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use rule_compose::load_configuration;
/// use std::path::Path;
///
/// # fn run() -> rule_compose::ComposeResult<()> {
/// if let Some(config) = load_configuration(Path::new(".eslintrc.json"))? {
///     println!("{} rules", config.rules.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] if reading, parsing or resolving
/// inheritance fails.
pub fn load_configuration(path: &Path) -> ComposeResult<Option<Configuration>> {
    load_configuration_with(path, MergePolicy::default())
}

/// Load a configuration file, resolving `extends` under `policy`.
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] if reading, parsing or resolving
/// inheritance fails.
pub fn load_configuration_with(
    path: &Path,
    policy: MergePolicy,
) -> ComposeResult<Option<Configuration>> {
    Ok(load_configuration_chain(path)?.map(|chain| chain.compose(policy)))
}

/// Load a configuration file as a chain of layers.
///
/// Unlike [`load_configuration`], each file of the `extends` chain is kept
/// as a separate layer.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] if reading or parsing any file fails,
/// if an `extends` target is missing, or if the chain is cyclic.
pub fn load_configuration_chain(path: &Path) -> ComposeResult<Option<ConfigChain>> {
    let mut visited = HashSet::new();
    let mut stack = Vec::new();
    let layers = with_cycle_detection(path, &mut visited, &mut stack, load_chain_for_file)?;
    Ok(layers.map(|chain| ConfigChain { layers: chain }))
}

fn with_cycle_detection<T, F>(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
    stack: &mut Vec<PathBuf>,
    operation: F,
) -> ComposeResult<Option<T>>
where
    F: FnOnce(&Path, &mut HashSet<PathBuf>, &mut Vec<PathBuf>) -> ComposeResult<T>,
{
    if !path.is_file() {
        return Ok(None);
    }
    let canonical = canonicalise(path)?;
    let normalised = normalise_cycle_key(&canonical);
    if !visited.insert(normalised.clone()) {
        let mut cycle: Vec<String> = stack.iter().map(|p| p.display().to_string()).collect();
        cycle.push(canonical.display().to_string());
        return Err(std::sync::Arc::new(ComposeError::CyclicExtends {
            cycle: cycle.join(" -> "),
        }));
    }
    stack.push(canonical.clone());
    let result = operation(&canonical, visited, stack);
    visited.remove(&normalised);
    stack.pop();
    result.map(Some)
}

fn load_chain_for_file(
    canonical: &Path,
    visited: &mut HashSet<PathBuf>,
    stack: &mut Vec<PathBuf>,
) -> ComposeResult<Vec<ConfigLayer>> {
    let data = std::fs::read_to_string(canonical).map_err(|e| ComposeError::file(canonical, e))?;
    let mut value = parse_config_by_format(canonical, &data)?;
    let parents = take_extends(&mut value, canonical)?;
    let configuration: Configuration =
        serde_json::from_value(value).map_err(|e| ComposeError::file(canonical, e))?;

    let mut layers = Vec::new();
    for parent in parents {
        let parent_canonical = resolve_base_path(canonical, parent)?;
        if !parent_canonical.is_file() {
            return Err(ComposeError::file_io(
                &parent_canonical,
                ErrorKind::InvalidInput,
                "extended path is not a regular file",
            ));
        }
        let Some(parent_layers) =
            with_cycle_detection(&parent_canonical, visited, stack, load_chain_for_file)?
        else {
            return Err(ComposeError::file_io(
                &parent_canonical,
                ErrorKind::NotFound,
                "extended file disappeared during load",
            ));
        };
        layers.extend(parent_layers);
    }

    debug!(
        path = %canonical.display(),
        ancestors = layers.len(),
        rules = configuration.rules.len(),
        "loaded configuration file"
    );
    layers.push(ConfigLayer::file(to_utf8_path(canonical), configuration));
    Ok(layers)
}
