//! Error types for `rule-compose`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use rule_compose::ComposeError;
use thiserror::Error;

/// Errors surfaced by the `rule-compose` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or resolving a configuration failed.
    #[error(transparent)]
    Compose(#[from] Arc<ComposeError>),

    /// An input path does not name an existing file.
    #[error("configuration file not found: {0}")]
    MissingFile(Utf8PathBuf),

    /// The layered CLI settings could not be extracted.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// The resolved configuration could not be encoded.
    #[error("failed to encode configuration: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
