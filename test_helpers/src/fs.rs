//! Temporary directories populated with configuration files.
//!
//! Each [`ConfigDir`] owns a fresh directory that is removed when the value
//! is dropped, so tests never share files.
//!
//! # Examples
//!
//! ```
//! use rule_compose_test_helpers::fs::ConfigDir;
//!
//! let dir = ConfigDir::new().expect("create temp dir");
//! let path = dir.write("base.json", r#"{"rules": {"a": "error"}}"#).expect("write");
//! assert!(path.is_file());
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory holding configuration fixtures.
#[derive(Debug)]
pub struct ConfigDir {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl ConfigDir {
    /// Create an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create temporary config dir")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not valid UTF-8: {}", path.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Returns the directory root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the absolute path of `name` inside the directory, whether or
    /// not it exists.
    #[must_use]
    pub fn join(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }
}
