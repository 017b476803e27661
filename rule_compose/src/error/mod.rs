//! Error types produced while loading and resolving rule configurations.
//!
//! The merge engine itself is total and never fails; errors only arise at the
//! edges, when configuration files are read or presets are resolved by name.

mod types;

pub use types::ComposeError;

#[cfg(test)]
mod tests;
