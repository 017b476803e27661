//! Deterministic composition of lint rule configurations.
//!
//! A resolved configuration is produced by deep-merging a base rule set with
//! a patch of additions, overrides and file-scoped exceptions:
//!
//! - `rules` merge key by key; a rule defined on both sides takes the
//!   patch's setting, with option objects optionally merged under
//!   [`OptionsMerge::Keyed`];
//! - `overrides` concatenate, base blocks first;
//! - every other key merges recursively, with arrays and scalars replaced by
//!   the patch.
//!
//! The merge functions are pure and total: they never fail and never mutate
//! their inputs. Errors only arise when configurations are loaded from disk
//! or presets are resolved by name.
//!
//! ```rust
//! use rule_compose::{Configuration, OverrideBlock, compose};
//! use serde_json::json;
//!
//! let functional = Configuration::from_value(json!({
//!     "rules": {
//!         "functional/immutable-data": "error",
//!         "functional/no-conditional-statement": "error"
//!     }
//! }))?;
//! let lite = compose(
//!     &functional,
//!     &Configuration::new()
//!         .with_rule("functional/immutable-data", json!(["error", {"ignoreClass": "fieldsOnly"}]))
//!         .with_rule("functional/no-conditional-statement", "off")
//!         .with_override(
//!             OverrideBlock::new(["*.ts", "*.tsx"])
//!                 .with_rule("functional/prefer-readonly-type-declaration", "warn"),
//!         ),
//! );
//!
//! assert_eq!(lite.rules["functional/no-conditional-statement"], "off");
//! assert_eq!(lite.overrides.len(), 1);
//! # Ok::<_, std::sync::Arc<rule_compose::ComposeError>>(())
//! ```

pub mod compose;
mod error;
pub mod file;
pub mod merge;
pub mod model;
pub mod overrides;
mod preset;
mod result_ext;

use std::sync::Arc;

pub use compose::{Composer, ConfigLayer, LayerSource, compose, compose_values, compose_with};
pub use error::ComposeError;
pub use file::{
    ConfigChain, load_configuration, load_configuration_chain, load_configuration_with,
};
pub use merge::{MergePolicy, OptionsMerge, merge_values};
pub use model::{Configuration, OverrideBlock, ParseKeywordError, RuleSetting, Severity};
pub use overrides::concat_overrides;
pub use preset::PresetRegistry;
pub use result_ext::ComposeResultExt;

/// Convenience alias for results returned by loading and resolution APIs.
pub type ComposeResult<T> = Result<T, Arc<ComposeError>>;
