//! Layer metadata and transport values for composition.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::model::Configuration;

/// Where a composed layer came from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum LayerSource {
    /// A named preset from a [`crate::PresetRegistry`].
    Preset(String),
    /// A configuration file, by canonical path.
    File(Utf8PathBuf),
    /// A value supplied directly by the caller.
    Inline,
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(name) => write!(f, "preset '{name}'"),
            Self::File(path) => write!(f, "file '{path}'"),
            Self::Inline => f.write_str("inline configuration"),
        }
    }
}

/// A configuration together with its provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigLayer {
    source: LayerSource,
    configuration: Configuration,
}

impl ConfigLayer {
    /// Construct a layer originating from a named preset.
    #[must_use]
    pub fn preset(name: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            source: LayerSource::Preset(name.into()),
            configuration,
        }
    }

    /// Construct a layer originating from a configuration file.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>, configuration: Configuration) -> Self {
        Self {
            source: LayerSource::File(path.into()),
            configuration,
        }
    }

    /// Construct a layer from a caller-supplied value.
    #[must_use]
    pub const fn inline(configuration: Configuration) -> Self {
        Self {
            source: LayerSource::Inline,
            configuration,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn source(&self) -> &LayerSource {
        &self.source
    }

    /// Returns the associated path if this layer was sourced from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match &self.source {
            LayerSource::File(path) => Some(path),
            LayerSource::Preset(_) | LayerSource::Inline => None,
        }
    }

    /// Returns the layer's configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Consume the layer, returning its configuration.
    #[must_use]
    pub fn into_configuration(self) -> Configuration {
        self.configuration
    }
}
