//! First-run installation of the launcher and its side-files
//!
//! The launcher executable and the two JSON side-files are copied from the
//! configurator's directory into a shared, client-independent directory. The
//! side-files are copied only when absent so operator-added mappings
//! survive; the launcher binary is always refreshed. The installed launcher
//! path is returned and threaded explicitly through the rest of the
//! configuration run.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};
use exttool_fs::Error as FsError;
use exttool_launch::store;

/// File name of the launcher binary shipped next to the configurator.
pub fn launcher_binary_name() -> String {
    format!("git-exttool-launcher{}", env::consts::EXE_SUFFIX)
}

/// The shared directory the launcher is installed into.
pub fn shared_install_dir() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(r"C:\Users\Public\Documents\GitExternalToolLauncher")
    }
    #[cfg(not(windows))]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("git-exttool")
    }
}

/// Install the launcher and side-files into the shared directory and return
/// the installed launcher path.
pub fn install_support_files(source_dir: &Path) -> Result<PathBuf> {
    install_support_files_into(source_dir, &shared_install_dir())
}

pub fn install_support_files_into(source_dir: &Path, dest_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dest_dir).map_err(|e| FsError::io(dest_dir, e))?;

    for name in [store::MAPPING_FILE, store::DEFAULT_CLIENT_FILE] {
        let source = source_dir.join(name);
        let dest = dest_dir.join(name);

        if dest.is_file() {
            // Never clobber: the mapping file may carry operator-added
            // entries, and the default client is rewritten later anyway.
            info!("File already exists at '{}', skipping copy", dest.display());
        } else if source.is_file() {
            fs::copy(&source, &dest).map_err(|e| FsError::io(&dest, e))?;
            info!("File copied to '{}'", dest.display());
        } else {
            info!(
                "'{name}' not found next to the configurator; the launcher will create defaults on first run"
            );
        }
    }

    let binary = launcher_binary_name();
    let source = source_dir.join(&binary);
    if !source.is_file() {
        return Err(Error::Install {
            message: format!("launcher binary '{}' not found", source.display()),
        });
    }

    let dest = dest_dir.join(&binary);
    fs::copy(&source, &dest).map_err(|e| FsError::io(&dest, e))?;
    info!("Launcher installed at '{}'", dest.display());

    Ok(dest)
}
