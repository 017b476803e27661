//! Primary error enum for configuration loading and preset resolution.

use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComposeError {
    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the configuration failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Cycle detected while resolving `extends` or derived presets.
    #[error("cyclic extends detected: {cycle}")]
    CyclicExtends {
        /// Chain of files or presets participating in the cycle.
        cycle: String,
    },

    /// A preset was requested by a name the registry does not know.
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// Name that failed to resolve.
        name: String,
    },

    /// A JSON value could not be converted into a configuration.
    #[error("Failed to decode configuration: {source}")]
    Decode {
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ComposeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}

impl ComposeError {
    /// Attribute `source` to the configuration file at `path`.
    pub(crate) fn file(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    /// Report a problem with `path` that has no underlying error of its own.
    ///
    /// The message travels as an [`io::Error`] of `kind`, so callers can
    /// match on the kind through [`std::error::Error::source`].
    pub(crate) fn file_io(
        path: &Path,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) -> Arc<Self> {
        Self::file(path, io::Error::new(kind, message.into()))
    }
}
