//! Git Cola configurator
//!
//! Git Cola rides on the system Git, so it supports per-repository and
//! system-global configuration but has no client-install level.

use std::path::PathBuf;

use crate::client::{ClientDescriptor, ClientKind};
use crate::configurator::ClientConfigurator;
use crate::gitpath;
use crate::locate::{ClientLocator, gitcola_locator};

pub struct GitColaConfigurator {
    locator: Box<dyn ClientLocator>,
}

impl GitColaConfigurator {
    pub fn new() -> Self {
        Self {
            locator: Box::new(gitcola_locator()),
        }
    }

    pub fn with_locator(locator: Box<dyn ClientLocator>) -> Self {
        Self { locator }
    }
}

impl Default for GitColaConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigurator for GitColaConfigurator {
    fn kind(&self) -> ClientKind {
        ClientKind::GitCola
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
