//! Layered settings for `rule-compose`.
//!
//! Values resolve from built-in defaults, then `RULE_COMPOSE_*` environment
//! variables, then command-line flags.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use rule_compose::{MergePolicy, OptionsMerge};
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::error::CliError;

/// Prefix for environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "RULE_COMPOSE_";

/// Resolved settings controlling composition and output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Strategy for rule option arrays defined on both sides.
    pub options_merge: OptionsMerge,
    /// Emit single-line JSON.
    pub compact: bool,
}

/// Flags explicitly given on the command line; unset flags leave lower
/// layers intact.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    options_merge: Option<OptionsMerge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compact: Option<bool>,
}

impl From<&Args> for CliOverrides {
    fn from(args: &Args) -> Self {
        Self {
            options_merge: args.options_merge,
            compact: args.is_compact.then_some(true),
        }
    }
}

impl Settings {
    /// Build the layered provider for `args`.
    #[must_use]
    pub fn figment(args: &Args) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(CliOverrides::from(args)))
    }

    /// Resolve settings for `args`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Settings`] when an environment variable holds a
    /// value of the wrong type.
    pub fn load(args: &Args) -> Result<Self, CliError> {
        Self::figment(args).extract().map_err(|err| CliError::Settings(Box::new(err)))
    }

    /// Returns the merge policy selected by these settings.
    #[must_use]
    pub const fn policy(&self) -> MergePolicy {
        MergePolicy {
            options: self.options_merge,
        }
    }
}
