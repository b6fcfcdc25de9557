//! Error types for exttool-configure

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] exttool_fs::Error),

    #[error("Launcher path is empty; the launcher must be installed before patching")]
    MissingLauncherPath,

    #[error("The provided repository path '{path}' does not exist")]
    RepositoryMissing { path: PathBuf },

    #[error("'{path}' is not a Git repository (no .git directory)")]
    NotARepository { path: PathBuf },

    #[error("Launcher installation failed: {message}")]
    Install { message: String },
}
