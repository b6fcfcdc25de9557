//! Visual Studio configurator
//!
//! Visual Studio bundles its own Git under the Team Explorer extension
//! directory, so client-level configuration patches that bundled gitconfig
//! rather than anything user-global. The recorded default client is the
//! `vsDiffMerge.exe` comparison tool shipped beside the IDE, not the IDE
//! executable itself.

use std::path::PathBuf;

use crate::client::{ClientDescriptor, ClientKind};
use crate::configurator::ClientConfigurator;
use crate::gitpath;
use crate::locate::{ClientLocator, VsWhereLocator};

fn team_explorer_dir(client: &ClientDescriptor) -> Option<PathBuf> {
    let ide_dir = client.client_path.parent()?;
    Some(
        ide_dir
            .join("CommonExtensions")
            .join("Microsoft")
            .join("TeamFoundation")
            .join("Team Explorer"),
    )
}

pub struct VisualStudioConfigurator {
    locator: Box<dyn ClientLocator>,
}

impl VisualStudioConfigurator {
    pub fn new() -> Self {
        Self {
            locator: Box::new(VsWhereLocator::new()),
        }
    }

    pub fn with_locator(locator: Box<dyn ClientLocator>) -> Self {
        Self { locator }
    }
}

impl Default for VisualStudioConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigurator for VisualStudioConfigurator {
    fn kind(&self) -> ClientKind {
        ClientKind::VisualStudio
    }

    fn locator(&self) -> &dyn ClientLocator {
        self.locator.as_ref()
    }

    fn client_config_path(&self, client: &ClientDescriptor) -> Option<PathBuf> {
        Some(
            team_explorer_dir(client)?
                .join("Git")
                .join("etc")
                .join("gitconfig"),
        )
    }

    fn global_config_path(&self) -> Option<PathBuf> {
        gitpath::system_global_gitconfig()
    }

    fn default_client_application(&self, clients: &[ClientDescriptor]) -> Option<PathBuf> {
        let first = clients.first()?;
        let vs_diff_merge = team_explorer_dir(first)?.join("vsDiffMerge.exe");

        vs_diff_merge.is_file().then_some(vs_diff_merge)
    }
}
