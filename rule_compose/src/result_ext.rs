//! Extension for mapping errors to `ComposeResult` concisely.
//!
//! Reduces repetitive `.map_err(|e| Arc::new(ComposeError::from(e)))` chains
//! when converting external error types into the crate's
//! `ComposeResult<T>` alias (`Result<T, Arc<ComposeError>>`).
//!
//! # Examples
//!
//! ```
//! use rule_compose::{ComposeResult, ComposeResultExt};
//!
//! fn parse() -> ComposeResult<serde_json::Value> {
//!     serde_json::from_str("{\"rules\": {}}").into_compose()
//! }
//! # assert!(parse().is_ok());
//! ```

use crate::{ComposeError, ComposeResult};
use std::sync::Arc;

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ComposeError>` into a `ComposeResult<T>`.
pub trait ComposeResultExt<T, E> {
    /// Convert `Result<T, E>` into `ComposeResult<T>` using
    /// `Into<ComposeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<ComposeError>`.
    fn into_compose(self) -> ComposeResult<T>;
}

impl<T, E> ComposeResultExt<T, E> for Result<T, E>
where
    E: Into<ComposeError>,
{
    fn into_compose(self) -> ComposeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
