//! Override block reconciliation.
//!
//! Blocks are concatenated, base first. No attempt is made to pair blocks
//! from the two sides: doing so would need glob equivalence, and the
//! consumer evaluates blocks in sequence anyway.

use serde_json::Value;

use crate::model::OverrideBlock;

/// Concatenate `base` and `patch` override blocks, in that order.
///
/// Each block is copied unchanged. The operation is not commutative.
///
/// # Examples
///
/// ```rust
/// use rule_compose::{OverrideBlock, concat_overrides};
///
/// let js = OverrideBlock::new(["*.js"]);
/// let ts = OverrideBlock::new(["*.ts"]);
/// let merged = concat_overrides(&[js.clone()], &[ts.clone()]);
/// assert_eq!(merged, vec![js, ts]);
/// ```
#[must_use]
pub fn concat_overrides(base: &[OverrideBlock], patch: &[OverrideBlock]) -> Vec<OverrideBlock> {
    base.iter().chain(patch).cloned().collect()
}

/// Untyped counterpart of [`concat_overrides`] for raw JSON block lists.
pub(crate) fn concat_override_values(base: &[Value], patch: &[Value]) -> Vec<Value> {
    base.iter().chain(patch).cloned().collect()
}
