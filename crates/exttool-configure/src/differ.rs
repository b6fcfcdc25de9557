//! Presence gate for the vendor sequence-file differ
//!
//! Configuration is pointless without the differ the mappings resolve to, so
//! the configurator verifies the installation up front. The install root is
//! published through an environment variable; the version-agnostic differ
//! launcher lives in the shared directory beside it.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the sequence-tools install root.
pub const DIFFER_ENV_VAR: &str = "SEQTOOLS";

/// Differ launcher under a sequence-tools install root's parent directory.
pub fn differ_under(install_root: &Path) -> Option<PathBuf> {
    let shared_root = install_root.parent()?;
    let launcher = shared_root
        .join("Shared")
        .join("SeqTools")
        .join(format!("FileDifferLauncher{}", env::consts::EXE_SUFFIX));

    launcher.is_file().then_some(launcher)
}

/// The installed differ launcher, located via [`DIFFER_ENV_VAR`].
pub fn locate_differ() -> Option<PathBuf> {
    let install_root = PathBuf::from(env::var_os(DIFFER_ENV_VAR)?);
    differ_under(&install_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_differ_found_in_shared_directory() {
        let temp = TempDir::new().unwrap();
        let install_root = temp.path().join("SeqTools").join("2024");
        let shared = temp.path().join("SeqTools").join("Shared").join("SeqTools");
        fs::create_dir_all(&install_root).unwrap();
        fs::create_dir_all(&shared).unwrap();

        let launcher = shared.join(format!("FileDifferLauncher{}", env::consts::EXE_SUFFIX));
        fs::write(&launcher, "").unwrap();

        assert_eq!(differ_under(&install_root), Some(launcher));
    }

    #[test]
    fn test_missing_differ_is_none() {
        let temp = TempDir::new().unwrap();
        let install_root = temp.path().join("SeqTools").join("2024");
        fs::create_dir_all(&install_root).unwrap();

        assert_eq!(differ_under(&install_root), None);
    }
}
