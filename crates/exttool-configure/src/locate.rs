//! Client installation discovery
//!
//! One locator per client kind, behind a trait so configurators can be
//! exercised in tests with a fixed installation. Visual Studio is discovered
//! through `vswhere.exe`; the other clients are probed at their conventional
//! install directories. Discovery yields zero or one installation.

use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;
use tracing::{info, warn};

use crate::client::ClientDescriptor;

/// Discovery seam: returns the best installation of one client, if any.
pub trait ClientLocator {
    fn locate(&self) -> Option<ClientDescriptor>;
}

/// Locator that probes a fixed list of conventional executable locations and
/// takes the first that exists.
pub struct DirectoryProbeLocator {
    client_name: &'static str,
    candidates: Vec<PathBuf>,
}

impl DirectoryProbeLocator {
    pub fn new(client_name: &'static str, candidates: Vec<PathBuf>) -> Self {
        Self {
            client_name,
            candidates,
        }
    }
}

impl ClientLocator for DirectoryProbeLocator {
    fn locate(&self) -> Option<ClientDescriptor> {
        let executable = self.candidates.iter().find(|path| path.is_file())?;
        info!("Found {} at '{}'", self.client_name, executable.display());

        Some(ClientDescriptor {
            client_name: self.client_name.to_string(),
            client_path: executable.clone(),
            version: String::new(),
        })
    }
}

/// Conventional locations of the Sourcetree executable.
pub fn sourcetree_locator() -> DirectoryProbeLocator {
    let mut candidates = Vec::new();
    if let Some(local) = dirs::data_local_dir() {
        candidates.push(local.join("SourceTree").join("SourceTree.exe"));
    }
    candidates.push(PathBuf::from(
        r"C:\Program Files (x86)\Atlassian\SourceTree\SourceTree.exe",
    ));

    DirectoryProbeLocator::new("Sourcetree", candidates)
}

/// Conventional locations of the GitKraken executable.
pub fn gitkraken_locator() -> DirectoryProbeLocator {
    let mut candidates = Vec::new();
    if let Some(local) = dirs::data_local_dir() {
        candidates.push(local.join("gitkraken").join("gitkraken.exe"));
    }

    DirectoryProbeLocator::new("GitKraken", candidates)
}

/// Conventional locations of the Git Cola executable.
pub fn gitcola_locator() -> DirectoryProbeLocator {
    DirectoryProbeLocator::new(
        "Git Cola",
        vec![
            PathBuf::from(r"C:\Program Files\git-cola\bin\git-cola.exe"),
            PathBuf::from(r"C:\Program Files (x86)\git-cola\bin\git-cola.exe"),
        ],
    )
}

/// Visual Studio discovery through `vswhere.exe`.
///
/// `vswhere` ships with the Visual Studio installer (2017 and later) and
/// reports every installed instance as JSON.
pub struct VsWhereLocator {
    vswhere: Option<PathBuf>,
}

impl VsWhereLocator {
    pub fn new() -> Self {
        Self {
            vswhere: conventional_vswhere_path(),
        }
    }
}

impl Default for VsWhereLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientLocator for VsWhereLocator {
    fn locate(&self) -> Option<ClientDescriptor> {
        let Some(vswhere) = self.vswhere.as_ref() else {
            warn!("vswhere.exe not found; install Visual Studio 2017 or later");
            return None;
        };

        let output = match Command::new(vswhere).arg("-format").arg("json").output() {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                warn!("vswhere exited with {}", output.status);
                return None;
            }
            Err(e) => {
                warn!("Failed to execute vswhere: {e}");
                return None;
            }
        };

        select_visual_studio(&String::from_utf8_lossy(&output.stdout))
    }
}

fn conventional_vswhere_path() -> Option<PathBuf> {
    let program_files = std::env::var_os("ProgramFiles(x86)")?;
    let vswhere = PathBuf::from(program_files)
        .join("Microsoft Visual Studio")
        .join("Installer")
        .join("vswhere.exe");

    vswhere.is_file().then_some(vswhere)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VsInstance {
    product_path: Option<PathBuf>,
    display_name: Option<String>,
    catalog: Option<VsCatalog>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VsCatalog {
    product_line_version: Option<String>,
    product_display_version: Option<String>,
}

fn edition_rank(instance: &VsInstance) -> u8 {
    let name = instance.display_name.as_deref().unwrap_or_default();
    if name.contains("Enterprise") {
        0
    } else if name.contains("Professional") {
        1
    } else {
        2
    }
}

fn line_version(instance: &VsInstance) -> &str {
    instance
        .catalog
        .as_ref()
        .and_then(|c| c.product_line_version.as_deref())
        .unwrap_or_default()
}

/// Pick the preferred instance from `vswhere -format json` output:
/// Enterprise over Professional over anything else, highest product-line
/// version within an edition.
pub fn select_visual_studio(json: &str) -> Option<ClientDescriptor> {
    let mut instances: Vec<VsInstance> = match serde_json::from_str(json) {
        Ok(instances) => instances,
        Err(e) => {
            warn!("Failed to parse vswhere output: {e}");
            return None;
        }
    };

    if instances.is_empty() {
        return None;
    }

    for instance in &instances {
        if let Some(name) = &instance.display_name {
            info!("Visual Studio found: {name}");
        }
    }

    instances.sort_by(|a, b| {
        edition_rank(a)
            .cmp(&edition_rank(b))
            .then_with(|| line_version(b).cmp(line_version(a)))
    });

    let best = instances.into_iter().next()?;

    Some(ClientDescriptor {
        client_name: best.display_name.unwrap_or_default(),
        client_path: best.product_path.unwrap_or_default(),
        version: best
            .catalog
            .and_then(|c| c.product_display_version)
            .unwrap_or_default(),
    })
}
