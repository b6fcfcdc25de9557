//! Client kinds, configuration levels and the configuration-request document

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Result, error::Error};
use exttool_fs::json;

/// A discovered Git client installation.
///
/// Produced by a locator, immutable afterwards; only used to derive
/// config-file locations and the default-client path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDescriptor {
    pub client_name: String,
    pub client_path: PathBuf,
    pub version: String,
}

/// Scope at which the external-tool registration is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// Per-repository `.git/config` files.
    Repo,
    /// The gitconfig bundled with a client installation.
    Client,
    /// The system-wide global gitconfig.
    Global,
}

impl ConfigLevel {
    /// Case-insensitive parse of the `ConfigurationLevel` request value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "REPO" => Some(Self::Repo),
            "CLIENT" => Some(Self::Client),
            "GLOBAL" => Some(Self::Global),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repo => "repo",
            Self::Client => "client",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for ConfigLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of supported Git clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    VisualStudio,
    SourceTree,
    GitKraken,
    GitCola,
}

impl ClientKind {
    pub const ALL: [ClientKind; 4] = [
        Self::VisualStudio,
        Self::SourceTree,
        Self::GitKraken,
        Self::GitCola,
    ];

    /// Parse the client kind from a configuration-request file name.
    ///
    /// Request files are named `<Client>_Config.json`; the token before the
    /// first underscore names the client, case-insensitively.
    pub fn from_config_file_name(file_name: &str) -> Option<Self> {
        let stem = Path::new(file_name).file_stem()?.to_string_lossy();
        let token = stem.split('_').next()?;

        match token.to_lowercase().as_str() {
            "visualstudio" => Some(Self::VisualStudio),
            "sourcetree" => Some(Self::SourceTree),
            "gitkraken" => Some(Self::GitKraken),
            "gitcola" => Some(Self::GitCola),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VisualStudio => "Visual Studio",
            Self::SourceTree => "Sourcetree",
            Self::GitKraken => "GitKraken",
            Self::GitCola => "Git Cola",
        }
    }

    /// JSON field name of the client array in this kind's request document.
    pub fn clients_field(&self) -> &'static str {
        match self {
            Self::VisualStudio => "MSVisualStudioClients",
            Self::SourceTree => "SourceTreeClients",
            Self::GitKraken => "GitKrakenClients",
            Self::GitCola => "GitColaClients",
        }
    }

    /// Level written into a freshly created default request file.
    pub fn default_level(&self) -> ConfigLevel {
        match self {
            Self::VisualStudio | Self::SourceTree => ConfigLevel::Client,
            Self::GitKraken | Self::GitCola => ConfigLevel::Global,
        }
    }

    pub fn supported_levels(&self) -> &'static [ConfigLevel] {
        match self {
            Self::VisualStudio | Self::SourceTree => {
                &[ConfigLevel::Repo, ConfigLevel::Client, ConfigLevel::Global]
            }
            Self::GitKraken => &[ConfigLevel::Global],
            Self::GitCola => &[ConfigLevel::Repo, ConfigLevel::Global],
        }
    }

    pub fn supports(&self, level: ConfigLevel) -> bool {
        self.supported_levels().contains(&level)
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The configuration-request document, read once per run.
///
/// The level is kept as the raw string and validated against the client
/// kind's supported set at dispatch time; an invalid combination is a
/// reported error, never a crash. The client array deserializes from any of
/// the four client-named field spellings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigurationRequest {
    #[serde(rename = "ConfigurationLevel", default)]
    pub level: String,

    #[serde(rename = "RepositoryPaths", default)]
    pub repository_paths: Vec<PathBuf>,

    #[serde(
        default,
        rename = "Clients",
        alias = "MSVisualStudioClients",
        alias = "SourceTreeClients",
        alias = "GitKrakenClients",
        alias = "GitColaClients"
    )]
    pub clients: Vec<ClientDescriptor>,
}

impl ConfigurationRequest {
    pub fn load(path: &Path) -> Result<Self> {
        json::load(path).map_err(Error::from)
    }
}
