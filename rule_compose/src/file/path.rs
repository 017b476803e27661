//! Filesystem path helpers used while resolving `extends` relationships.

use crate::{ComposeError, ComposeResult};

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Canonicalise `p` using platform-specific rules.
///
/// Returns an absolute, normalised path with symlinks resolved. On Windows
/// the `dunce` crate is used to avoid UNC prefixes in diagnostics.
///
/// # Errors
///
/// Returns a [`ComposeError::File`] if canonicalisation fails.
pub fn canonicalise(p: &Path) -> ComposeResult<PathBuf> {
    canonicalise_io(p).map_err(|e| ComposeError::file(p, e))
}

fn canonicalise_io(p: &Path) -> io::Result<PathBuf> {
    #[cfg(windows)]
    {
        dunce::canonicalize(p)
    }
    #[cfg(not(windows))]
    {
        std::fs::canonicalize(p)
    }
}

/// Normalise a canonical path for case-insensitive cycle detection.
///
/// Windows and macOS compare paths case-insensitively, so the key is
/// lower-cased there; elsewhere the path is returned unchanged.
pub(super) fn normalise_cycle_key(path: &Path) -> PathBuf {
    #[cfg(any(windows, target_os = "macos"))]
    {
        match path.to_str() {
            Some(text) => PathBuf::from(text.to_lowercase()),
            None => path.to_path_buf(),
        }
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    {
        path.to_path_buf()
    }
}

/// Resolve an `extends` entry against the file that declares it.
///
/// Relative entries are taken from the declaring file's directory. The
/// target is canonicalised, and a missing target is reported as
/// [`ErrorKind::NotFound`] naming both files.
///
/// # Errors
///
/// Returns a [`ComposeError::File`] if the declaring file has no parent
/// directory or the target cannot be canonicalised.
pub(super) fn resolve_base_path(current_path: &Path, base: PathBuf) -> ComposeResult<PathBuf> {
    let Some(dir) = current_path.parent() else {
        return Err(ComposeError::file_io(
            current_path,
            ErrorKind::InvalidInput,
            "configuration file has no parent directory to resolve 'extends' against",
        ));
    };
    let target = if base.is_absolute() {
        base
    } else {
        canonicalise(dir)?.join(base)
    };
    canonicalise_io(&target).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            ComposeError::file_io(
                &target,
                ErrorKind::NotFound,
                format!(
                    "'{}' extends '{}', which does not exist",
                    current_path.display(),
                    target.display()
                ),
            )
        } else {
            ComposeError::file(&target, err)
        }
    })
}
