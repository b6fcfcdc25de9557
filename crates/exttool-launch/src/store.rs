//! Persisted extension-mapping and default-client documents
//!
//! Two JSON side-files live next to the launcher executable: the ordered
//! extension-to-application mapping table and the default Git client path
//! used when no mapping entry matches. The mapping file is created with
//! built-in defaults on first use and is otherwise only edited out-of-band
//! by the operator; the default-client file is overwritten by the
//! configuration step whenever a new default client is established.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Result;
use exttool_fs::json;

/// File name of the extension-to-application mapping table.
pub const MAPPING_FILE: &str = "fileExtensionToApplicationMapping.json";

/// File name of the default Git client document (a bare JSON string).
pub const DEFAULT_CLIENT_FILE: &str = "defaultGitClient.json";

/// Conventional install location of the vendor sequence-file differ the
/// built-in mappings point at.
pub const DIFFER_LAUNCHER_PATH: &str =
    r"C:\Program Files (x86)\SeqTools\Shared\SeqTools\FileDifferLauncher.exe";

/// One entry of the extension mapping table. Matched case-insensitively,
/// first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtensionMapping {
    pub file_extension: String,
    pub application_path: PathBuf,
}

/// Built-in mappings written when the mapping file is absent: the sequence
/// file types handled by the vendor differ.
pub fn builtin_mappings() -> Vec<ExtensionMapping> {
    [".seq", ".tpj", ".tsw"]
        .into_iter()
        .map(|extension| ExtensionMapping {
            file_extension: extension.to_string(),
            application_path: PathBuf::from(DIFFER_LAUNCHER_PATH),
        })
        .collect()
}

/// Store rooted at the directory holding the two side-files.
#[derive(Debug, Clone)]
pub struct ToolStore {
    dir: PathBuf,
}

impl ToolStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.dir.join(MAPPING_FILE)
    }

    pub fn default_client_path(&self) -> PathBuf {
        self.dir.join(DEFAULT_CLIENT_FILE)
    }

    /// Load the mapping table, writing the built-in defaults first when the
    /// file does not exist yet.
    pub fn load_or_create_mappings(&self) -> Result<Vec<ExtensionMapping>> {
        let path = self.mapping_path();

        if !path.is_file() {
            info!(
                "Extension mapping file '{}' not found, creating it with built-in defaults",
                path.display()
            );
            let defaults = builtin_mappings();
            json::save(&path, &defaults)?;
            return Ok(defaults);
        }

        Ok(json::load(&path)?)
    }

    /// The configured default Git client, or `None` when the document is
    /// absent.
    pub fn default_client(&self) -> Result<Option<PathBuf>> {
        let path = self.default_client_path();
        if !path.is_file() {
            return Ok(None);
        }

        let application: String = json::load(&path)?;
        Ok(Some(PathBuf::from(application)))
    }

    /// Record a new default Git client.
    ///
    /// Only updates an existing document; returns `Ok(false)` when the file
    /// has not been installed yet.
    pub fn set_default_client(&self, application: &Path) -> Result<bool> {
        let path = self.default_client_path();
        if !path.is_file() {
            return Ok(false);
        }

        json::save(&path, &application.to_string_lossy())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_first_access_creates_builtin_mappings() {
        let temp = TempDir::new().unwrap();
        let store = ToolStore::new(temp.path());

        let mappings = store.load_or_create_mappings().unwrap();

        assert_eq!(mappings, builtin_mappings());
        assert!(store.mapping_path().is_file());
    }

    #[test]
    fn test_existing_mappings_are_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let store = ToolStore::new(temp.path());

        let custom = vec![ExtensionMapping {
            file_extension: ".vi".to_string(),
            application_path: PathBuf::from(r"C:\tools\compare.exe"),
        }];
        json::save(&store.mapping_path(), &custom).unwrap();

        let mappings = store.load_or_create_mappings().unwrap();
        assert_eq!(mappings, custom);
    }

    #[test]
    fn test_default_client_absent_is_none() {
        let temp = TempDir::new().unwrap();
        let store = ToolStore::new(temp.path());
        assert_eq!(store.default_client().unwrap(), None);
    }

    #[test]
    fn test_set_default_client_skips_missing_document() {
        let temp = TempDir::new().unwrap();
        let store = ToolStore::new(temp.path());

        let updated = store
            .set_default_client(Path::new(r"C:\clients\client.exe"))
            .unwrap();

        assert!(!updated);
        assert!(!store.default_client_path().exists());
    }

    #[test]
    fn test_default_client_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = ToolStore::new(temp.path());

        json::save(&store.default_client_path(), &String::new()).unwrap();
        let updated = store
            .set_default_client(Path::new(r"C:\clients\client.exe"))
            .unwrap();

        assert!(updated);
        assert_eq!(
            store.default_client().unwrap(),
            Some(PathBuf::from(r"C:\clients\client.exe"))
        );
    }

    #[test]
    fn test_mapping_file_uses_pascal_case_fields() {
        let temp = TempDir::new().unwrap();
        let store = ToolStore::new(temp.path());

        store.load_or_create_mappings().unwrap();
        let content = std::fs::read_to_string(store.mapping_path()).unwrap();

        assert!(content.contains("\"FileExtension\""));
        assert!(content.contains("\"ApplicationPath\""));
    }
}
