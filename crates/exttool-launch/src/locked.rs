//! Workaround for comparison files held open by the invoking client
//!
//! Some clients keep their working file open for the whole lifetime of the
//! external tool, which makes the file unreadable for the comparison
//! application. The probe attempts an exclusive lock; a file that cannot be
//! locked is copied to a `Copy_`-prefixed sibling and the copy is compared
//! instead. The original file is never modified.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{error, info};

use crate::Result;
use exttool_fs::Error as FsError;

/// Prefix of the sibling copy created for a locked file.
pub const LOCKED_COPY_PREFIX: &str = "Copy_";

/// Probe whether another process holds the file exclusively.
///
/// A missing file is not locked; it will surface as a launch-time error
/// instead.
pub fn is_locked(path: &Path) -> bool {
    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => {
            if file.try_lock_exclusive().is_err() {
                return true;
            }
            let _ = FileExt::unlock(&file);
            false
        }
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(_) => true,
    }
}

fn copy_for_comparison(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        FsError::io(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;

    let copy_name = format!("{}{}", LOCKED_COPY_PREFIX, name.to_string_lossy());
    let copy_path = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(copy_name),
        _ => PathBuf::from(copy_name),
    };

    fs::copy(path, &copy_path).map_err(|e| FsError::io(&copy_path, e))?;
    Ok(copy_path)
}

/// Substitute a locked comparison source with a sibling copy.
///
/// Returns the original path when the file is not locked, and also when the
/// copy itself fails (the launch attempt then reports the real error).
pub fn substitute_if_locked(path: &Path) -> PathBuf {
    if !is_locked(path) {
        return path.to_path_buf();
    }

    info!(
        "File '{}' is locked by another process, creating a copy for comparing",
        path.display()
    );

    match copy_for_comparison(path) {
        Ok(copy) => {
            info!("Copy of file created at '{}'", copy.display());
            copy
        }
        Err(e) => {
            error!(
                "Failed to create a copy of the file '{}': {e}",
                path.display()
            );
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unlocked_file_is_used_directly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.seq");
        fs::write(&path, "content").unwrap();

        assert!(!is_locked(&path));
        assert_eq!(substitute_if_locked(&path), path);
    }

    #[test]
    fn test_missing_file_is_not_locked() {
        let temp = TempDir::new().unwrap();
        assert!(!is_locked(&temp.path().join("absent.seq")));
    }

    #[test]
    fn test_locked_file_is_detected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.seq");
        fs::write(&path, "content").unwrap();

        let holder = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        holder.lock_exclusive().unwrap();

        assert!(is_locked(&path));

        FileExt::unlock(&holder).unwrap();
        assert!(!is_locked(&path));
    }

    #[test]
    fn test_locked_file_is_substituted_with_copy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.seq");
        fs::write(&path, "original content").unwrap();

        let holder = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        holder.lock_exclusive().unwrap();

        let substituted = substitute_if_locked(&path);

        assert_eq!(substituted, temp.path().join("Copy_a.seq"));
        assert_eq!(
            fs::read_to_string(&substituted).unwrap(),
            "original content"
        );
        // The original stays in place, untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "original content");
    }
}
