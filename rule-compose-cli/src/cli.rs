//! Command-line interface definitions for `rule-compose`.

use camino::Utf8PathBuf;
use clap::Parser;
use rule_compose::OptionsMerge;

/// Parsed CLI arguments for `rule-compose`.
#[derive(Debug, Parser)]
#[command(name = "rule-compose")]
#[command(about = "Compose lint rule configuration files into one resolved document")]
#[command(version)]
pub struct Args {
    /// Base configuration file.
    #[arg(value_name = "BASE")]
    pub base: Utf8PathBuf,
    /// Files composed over the base, in order.
    #[arg(value_name = "PATCH")]
    pub patches: Vec<Utf8PathBuf>,
    /// Strategy for rule option arrays defined on both sides.
    #[arg(long, value_name = "replace|keyed")]
    pub options_merge: Option<OptionsMerge>,
    /// Emit single-line JSON instead of pretty-printed output.
    #[arg(long = "compact")]
    pub is_compact: bool,
    /// Log each composed layer at debug level.
    #[arg(short = 'v', long = "verbose")]
    pub is_verbose: bool,
}

impl Args {
    /// Iterate the input files in fold order: the base, then each patch.
    pub fn inputs(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        std::iter::once(&self.base).chain(&self.patches)
    }
}
