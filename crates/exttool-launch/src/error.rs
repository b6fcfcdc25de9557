//! Error types for exttool-launch

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] exttool_fs::Error),

    #[error("Expected 2 files (diff) or 4 files (merge), got {count}")]
    WrongArgumentCount { count: usize },

    #[error("Files have different extensions ({extensions}); cannot compare files of different types")]
    ExtensionMismatch { extensions: String },

    #[error("Failed to launch application '{application}': {source}")]
    LaunchFailed {
        application: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn extension_mismatch(extensions: &[String]) -> Self {
        Self::ExtensionMismatch {
            extensions: extensions.join(", "),
        }
    }
}
