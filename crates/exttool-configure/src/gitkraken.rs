//! GitKraken configurator
//!
//! GitKraken has no per-install gitconfig of its own, so it is only
//! configurable through the system-wide gitconfig.

use std::path::PathBuf;

use crate::client::{ClientDescriptor, ClientKind};
use crate::configurator::ClientConfigurator;
use crate::gitpath;
use crate::locate::{ClientLocator, gitkraken_locator};

pub struct GitKrakenConfigurator {
    locator: Box<dyn ClientLocator>,
}

impl GitKrakenConfigurator {
    pub fn new() -> Self {
        Self {
            locator: Box::new(gitkraken_locator()),
        }
    }

    pub fn with_locator(locator: Box<dyn ClientLocator>) -> Self {
        Self { locator }
    }
}

impl Default for GitKrakenConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigurator for GitKrakenConfigurator {
    fn kind(&self) -> ClientKind {
        ClientKind::GitKraken
    }

    fn locator(&self) -> &dyn ClientLocator {
        self.locator.as_ref()
    }

    fn client_config_path(&self, _client: &ClientDescriptor) -> Option<PathBuf> {
        None
    }

    fn global_config_path(&self) -> Option<PathBuf> {
        gitpath::system_global_gitconfig()
    }

    fn default_client_application(&self, clients: &[ClientDescriptor]) -> Option<PathBuf> {
        clients.first().map(|client| client.client_path.clone())
    }
}
