//! Locating the Git installation and its system-wide gitconfig

use std::env;
use std::path::PathBuf;

/// Directory of the Git installation found on `PATH`.
///
/// The first `PATH` entry naming Git is taken to belong to the installation
/// (typically `<install root>/cmd` or `<install root>/bin`).
pub fn git_install_dir() -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path).find(|entry| entry.to_string_lossy().contains("Git"))
}

/// The system-wide global gitconfig, `<install root>/etc/gitconfig`.
///
/// `None` when Git is not installed or the file does not exist; callers
/// report that as a configuration error.
pub fn system_global_gitconfig() -> Option<PathBuf> {
    let install_dir = git_install_dir()?;
    let root = install_dir.parent()?;
    let candidate = root.join("etc").join("gitconfig");

    candidate.is_file().then_some(candidate)
}
