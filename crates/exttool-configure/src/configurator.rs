//! The single interface shared by the four client configurators
//!
//! Every client supports the same two operations — create a default request
//! file from a discovered installation, and configure from a request file —
//! and differs only in discovery, config-file conventions and which
//! application becomes the default client. Those differences are the
//! required hooks; the two operations are provided on the trait and form the
//! operation boundary: they log failures and return a plain success flag,
//! never an error.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::client::{ClientDescriptor, ClientKind, ConfigLevel, ConfigurationRequest};
use crate::gitcola::GitColaConfigurator;
use crate::gitkraken::GitKrakenConfigurator;
use crate::locate::ClientLocator;
use crate::sourcetree::SourceTreeConfigurator;
use crate::visual_studio::VisualStudioConfigurator;
use crate::{Result, levels};
use exttool_fs::{Error as FsError, json};
use exttool_launch::ToolStore;

pub trait ClientConfigurator {
    fn kind(&self) -> ClientKind;

    /// Discovery seam used when creating a default request file.
    fn locator(&self) -> &dyn ClientLocator;

    /// Client-install-level gitconfig location for one discovered client.
    fn client_config_path(&self, client: &ClientDescriptor) -> Option<PathBuf>;

    /// Global-level gitconfig location for this client kind.
    fn global_config_path(&self) -> Option<PathBuf>;

    /// Application recorded as the default Git client after configuration.
    fn default_client_application(&self, clients: &[ClientDescriptor]) -> Option<PathBuf>;

    /// Create a default request file for the best installed client.
    fn create_default_request(&self, path: &Path) -> bool {
        let kind = self.kind();

        let Some(client) = self.locator().locate() else {
            error!("No installation of {} found", kind.display_name());
            return false;
        };

        match write_default_request(kind, &client, path) {
            Ok(()) => {
                info!("Default configuration file created at '{}'", path.display());
                true
            }
            Err(e) => {
                error!("Failed to create default configuration file: {e}");
                false
            }
        }
    }

    /// Configure this client from a request file, patching every config file
    /// the requested level resolves to.
    fn configure(&self, request_path: &Path, launcher: &Path) -> bool {
        let request = match ConfigurationRequest::load(request_path) {
            Ok(request) => request,
            Err(e) => {
                error!(
                    "Failed to read configuration request '{}': {e}",
                    request_path.display()
                );
                return false;
            }
        };

        let kind = self.kind();
        info!("Configuring client: {}", kind.display_name());
        info!("Configuring level: {}", request.level);

        let success = match ConfigLevel::parse(&request.level) {
            Some(level) if kind.supports(level) => match level {
                ConfigLevel::Repo => {
                    levels::patch_repositories(&request.repository_paths, launcher)
                }
                ConfigLevel::Client => levels::patch_clients(
                    &request.clients,
                    |client| self.client_config_path(client),
                    launcher,
                ),
                ConfigLevel::Global => levels::patch_global(self.global_config_path(), launcher),
            },
            _ => {
                error!(
                    "Invalid configuration level '{}' for {}",
                    request.level,
                    kind.display_name()
                );
                false
            }
        };

        // Best effort: a default-client failure never fails the
        // configuration itself.
        self.record_default_client(&request.clients, launcher);

        success
    }

    fn record_default_client(&self, clients: &[ClientDescriptor], launcher: &Path) {
        let Some(application) = self.default_client_application(clients) else {
            return;
        };
        let Some(store_dir) = launcher.parent() else {
            return;
        };

        match ToolStore::new(store_dir).set_default_client(&application) {
            Ok(true) => info!("Default Git client set to '{}'", application.display()),
            Ok(false) => warn!("Default client file not installed yet, skipping update"),
            Err(e) => error!("Failed to update the default Git client: {e}"),
        }
    }
}

/// Look up the configurator implementation for a client kind.
pub fn configurator_for(kind: ClientKind) -> Box<dyn ClientConfigurator> {
    match kind {
        ClientKind::VisualStudio => Box::new(VisualStudioConfigurator::new()),
        ClientKind::SourceTree => Box::new(SourceTreeConfigurator::new()),
        ClientKind::GitKraken => Box::new(GitKrakenConfigurator::new()),
        ClientKind::GitCola => Box::new(GitColaConfigurator::new()),
    }
}

/// Write a default request file: the discovered client under the kind's own
/// array name, at the kind's default level.
pub fn write_default_request(
    kind: ClientKind,
    client: &ClientDescriptor,
    path: &Path,
) -> Result<()> {
    let clients = serde_json::to_value(vec![client.clone()]).map_err(|e| FsError::JsonSerialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut document = Map::new();
    document.insert(kind.clients_field().to_string(), clients);
    document.insert(
        "ConfigurationLevel".to_string(),
        Value::String(kind.default_level().as_str().to_string()),
    );

    json::save(path, &Value::Object(document))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_configurator_lookup_covers_every_kind() {
        for kind in ClientKind::ALL {
            assert_eq!(configurator_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_default_request_uses_kind_array_name_and_level() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("GitKraken_Config.json");

        let client = ClientDescriptor {
            client_name: "GitKraken".to_string(),
            client_path: PathBuf::from(r"C:\gitkraken\gitkraken.exe"),
            version: "10.0".to_string(),
        };
        write_default_request(ClientKind::GitKraken, &client, &path).unwrap();

        let document: Value = json::load(&path).unwrap();
        assert!(document.get("GitKrakenClients").is_some());
        assert_eq!(document["ConfigurationLevel"], "global");
        assert_eq!(document["GitKrakenClients"][0]["ClientName"], "GitKraken");

        // And it reads back through the unified request shape.
        let request = ConfigurationRequest::load(&path).unwrap();
        assert_eq!(request.clients.len(), 1);
    }
}
