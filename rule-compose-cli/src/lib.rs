//! Library half of the `rule-compose` command.
//!
//! Loads each input file (following `extends`), folds the files left to
//! right, and writes the resolved configuration as JSON.

pub mod cli;
pub mod error;
pub mod settings;

use std::io::Write;

use rule_compose::{Composer, load_configuration_chain};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::error::CliError;
use crate::settings::Settings;

/// Install the global `tracing` subscriber, writing to standard error.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when
/// `is_verbose` is set and `warn` when not. Repeated calls are ignored.
pub fn init_tracing(is_verbose: bool) {
    let fallback = if is_verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _already_installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Compose the files named by `args` and write the result to `out`.
///
/// # Errors
///
/// Returns [`CliError::MissingFile`] when an input does not exist, and
/// propagates load, encoding and write failures.
pub fn run<W: Write>(args: &Args, settings: &Settings, out: &mut W) -> Result<(), CliError> {
    let mut composer = Composer::new().with_policy(settings.policy());
    for path in args.inputs() {
        let chain = load_configuration_chain(path.as_std_path())?
            .ok_or_else(|| CliError::MissingFile(path.clone()))?;
        composer.push_chain(chain);
    }
    info!(
        layers = composer.layers().len(),
        policy = %settings.options_merge,
        "composing configuration"
    );

    let resolved = composer.compose().to_value();
    if settings.compact {
        serde_json::to_writer(&mut *out, &resolved)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &resolved)?;
    }
    writeln!(out)?;
    Ok(())
}
