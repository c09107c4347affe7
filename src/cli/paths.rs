//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Make the gradebook directory absolute.
///
/// A relative directory is joined to the current working directory, or to
/// "." if that cannot be determined.
pub fn resolve_dir(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(dir)
}

/// Locate the class file. A relative path is taken to be inside `dir`; an
/// absolute path is used as given.
pub fn resolve_class_file(dir: &Path, class: &Path) -> PathBuf {
    dir.join(class)
}
