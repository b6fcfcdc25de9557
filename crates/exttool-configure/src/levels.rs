//! Level resolution: from a configuration level to patched config files
//!
//! Each public function patches every file the level resolves to and
//! aggregates one overall success flag as the AND across all entries: a
//! single failed path fails the run even when later paths succeed. Failures
//! are logged per entry and never abort the remaining entries.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::client::ClientDescriptor;
use crate::{Error, Result, stanza};
use exttool_fs::Error as FsError;

/// Patch the `.git/config` of every candidate repository directory.
pub fn patch_repositories(repositories: &[PathBuf], launcher: &Path) -> bool {
    let mut all_ok = true;

    for repository in repositories {
        let ok = match patch_repository(repository, launcher) {
            Ok(()) => {
                info!("Configured repository '{}'", repository.display());
                true
            }
            Err(e) => {
                error!("Failed to configure repository '{}': {e}", repository.display());
                false
            }
        };

        all_ok &= ok;
    }

    all_ok
}

fn patch_repository(repository: &Path, launcher: &Path) -> Result<()> {
    if !repository.is_dir() {
        return Err(Error::RepositoryMissing {
            path: repository.to_path_buf(),
        });
    }

    let repository = dunce::canonicalize(repository)
        .map_err(|e| FsError::io(repository, e))?;

    let git_dir = repository.join(".git");
    if !git_dir.is_dir() {
        return Err(Error::NotARepository { path: repository });
    }

    let config = git_dir.join("config");
    if !config.is_file() {
        info!(
            "Config file not found for repository '{}', creating it",
            repository.display()
        );
        fs::write(&config, "").map_err(|e| FsError::io(&config, e))?;
    }

    stanza::patch(&config, launcher)
}

/// Patch the client-install gitconfig of every discovered client.
///
/// The conventional location differs per client kind, so the caller supplies
/// the resolution function.
pub fn patch_clients<F>(clients: &[ClientDescriptor], config_path_for: F, launcher: &Path) -> bool
where
    F: Fn(&ClientDescriptor) -> Option<PathBuf>,
{
    let mut all_ok = true;

    for client in clients {
        let ok = match config_path_for(client) {
            Some(config) => match stanza::patch(&config, launcher) {
                Ok(()) => {
                    info!(
                        "Configured client '{}' via '{}'",
                        client.client_name,
                        config.display()
                    );
                    true
                }
                Err(e) => {
                    error!("Failed to configure client '{}': {e}", client.client_name);
                    false
                }
            },
            None => {
                error!(
                    "Git config file not found for client '{}'",
                    client.client_name
                );
                false
            }
        };

        all_ok &= ok;
    }

    all_ok
}

/// Patch a single global gitconfig, when one was found.
pub fn patch_global(config: Option<PathBuf>, launcher: &Path) -> bool {
    match config {
        Some(config) => match stanza::patch(&config, launcher) {
            Ok(()) => {
                info!("Configured global gitconfig '{}'", config.display());
                true
            }
            Err(e) => {
                error!("Failed to configure global gitconfig '{}': {e}", config.display());
                false
            }
        },
        None => {
            error!("Global Git config file not found");
            false
        }
    }
}
