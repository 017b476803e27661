//! Test helpers shared across crates.
//!
//! This crate currently provides temporary configuration directories.

pub mod fs;
