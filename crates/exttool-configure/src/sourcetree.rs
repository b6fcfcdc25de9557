//! Sourcetree configurator
//!
//! Sourcetree can carry a private Git under `git_local` beside its install
//! directory; when that exists its gitconfig is the client-level target,
//! otherwise Sourcetree uses the system Git and the system gitconfig is
//! patched instead. Its "global" scope is the per-user `~/.gitconfig`, not
//! the system-wide file.

use std::path::PathBuf;

use crate::client::{ClientDescriptor, ClientKind};
use crate::configurator::ClientConfigurator;
use crate::gitpath;
use crate::locate::{ClientLocator, sourcetree_locator};

pub struct SourceTreeConfigurator {
    locator: Box<dyn ClientLocator>,
}

impl SourceTreeConfigurator {
    pub fn new() -> Self {
        Self {
            locator: Box::new(sourcetree_locator()),
        }
    }

    pub fn with_locator(locator: Box<dyn ClientLocator>) -> Self {
        Self { locator }
    }
}

impl Default for SourceTreeConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigurator for SourceTreeConfigurator {
    fn kind(&self) -> ClientKind {
        ClientKind::SourceTree
    }

    fn locator(&self) -> &dyn ClientLocator {
        self.locator.as_ref()
    }

    fn client_config_path(&self, client: &ClientDescriptor) -> Option<PathBuf> {
        let install_dir = client.client_path.parent()?;
        let install_parent = install_dir.parent()?;

        let git_local = install_parent
            .join("Atlassian")
            .join("SourceTree")
            .join("git_local");

        if git_local.is_dir() {
            Some(git_local.join("etc").join("gitconfig"))
        } else {
            // No embedded Git: Sourcetree falls back to the system Git, so
            // its client configuration lives in the system gitconfig.
            gitpath::system_global_gitconfig()
        }
    }

    fn global_config_path(&self) -> Option<PathBuf> {
        let config = dirs::home_dir()?.join(".gitconfig");
        config.is_file().then_some(config)
    }

    fn default_client_application(&self, clients: &[ClientDescriptor]) -> Option<PathBuf> {
        clients.first().map(|client| client.client_path.clone())
    }
}
