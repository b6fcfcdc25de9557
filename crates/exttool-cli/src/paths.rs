//! Executable-relative paths

use std::path::{Path, PathBuf};

/// Directory holding the running executable.
///
/// Configuration request files, the mapping side-files and the log file are
/// all resolved against this directory.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
