//! Helpers for reading rule configurations from disk.
//!
//! Files may inherit from other files through an `extends` key holding a
//! path or a list of paths, resolved relative to the extending file.

mod extends;
mod loader;
mod parser;
mod path;
#[cfg(feature = "yaml")]
mod yaml;

pub use loader::{
    ConfigChain, load_configuration, load_configuration_chain, load_configuration_with,
};
pub use path::canonicalise;
