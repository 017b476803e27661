//! Configuration data model.
//!
//! A [`Configuration`] is plain data: a map of rule settings, an ordered list
//! of [`OverrideBlock`]s, and any other top-level keys carried through
//! untouched. Rule settings and override blocks are stored as opaque JSON
//! values so that the merge engine stays total over malformed input;
//! [`RuleSetting`] and the [`OverrideBlock`] accessors offer a typed view for
//! callers that want one.

mod configuration;
mod severity;
mod setting;

pub use configuration::{Configuration, OverrideBlock};
pub use severity::{ParseKeywordError, Severity};
pub use setting::RuleSetting;

/// Key holding the rule map in a configuration document.
pub const RULES_KEY: &str = "rules";

/// Key holding the ordered override blocks in a configuration document.
pub const OVERRIDES_KEY: &str = "overrides";

/// Key holding the glob list inside an override block.
pub const FILES_KEY: &str = "files";
