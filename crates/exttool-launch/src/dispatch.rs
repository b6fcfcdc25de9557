//! Dispatches a Git diff/merge invocation to the mapped application
//!
//! Pipeline for one invocation: derive the extension class, resolve it to an
//! application through the store, substitute locked comparison sources, then
//! spawn the application and block until it exits. No step retries; the
//! first failure aborts the dispatch with a logged error.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{error, info};

use crate::store::ToolStore;
use crate::{Error, Result, extensions, locked};

/// Which Git operation the invocation serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// Two files: local and remote.
    Diff,
    /// Four files: base, local, remote and the merge output.
    Merge,
}

/// A validated dispatch invocation: exactly two or exactly four file paths.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    files: Vec<PathBuf>,
    mode: CompareMode,
}

impl DispatchRequest {
    pub fn new(files: Vec<PathBuf>) -> Result<Self> {
        let mode = match files.len() {
            2 => CompareMode::Diff,
            4 => CompareMode::Merge,
            count => return Err(Error::WrongArgumentCount { count }),
        };

        Ok(Self { files, mode })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn mode(&self) -> CompareMode {
        self.mode
    }
}

/// Run one dispatch to completion.
///
/// This is the operation boundary: every failure is logged and converted to
/// `false`, nothing propagates to the caller.
pub fn dispatch(request: &DispatchRequest, store: &ToolStore) -> bool {
    match run(request, store) {
        Ok(status) => {
            info!("External tool exited with {status}");
            true
        }
        Err(e) => {
            error!("Failed to launch the external tool: {e}");
            false
        }
    }
}

fn run(request: &DispatchRequest, store: &ToolStore) -> Result<ExitStatus> {
    let class = extensions::extension_class(request.files())?;
    let application = resolve_application(store, &class)?;

    // Only the two comparison sources can be held open by the client; the
    // merge output is written by the tool itself.
    let mut files = request.files().to_vec();
    for file in files.iter_mut().take(2) {
        *file = locked::substitute_if_locked(file);
    }

    launch(&application, &files)
}

/// Resolve an extension class to an application path.
///
/// Exact case-insensitive match against the mapping table, first match wins;
/// otherwise the configured default Git client. An empty result is returned
/// as-is and fails at launch time.
fn resolve_application(store: &ToolStore, extension: &str) -> Result<PathBuf> {
    let mappings = store.load_or_create_mappings()?;

    if let Some(mapping) = mappings
        .iter()
        .find(|m| m.file_extension.eq_ignore_ascii_case(extension))
    {
        return Ok(mapping.application_path.clone());
    }

    info!("No application mapped for file extension '{extension}'");
    info!("Falling back to the configured default Git client");

    Ok(store.default_client()?.unwrap_or_default())
}

fn launch(application: &Path, files: &[PathBuf]) -> Result<ExitStatus> {
    info!(
        "Launching '{}' with {} file(s)",
        application.display(),
        files.len()
    );

    let mut child = Command::new(application)
        .args(files)
        .spawn()
        .map_err(|source| Error::LaunchFailed {
            application: application.to_path_buf(),
            source,
        })?;

    child.wait().map_err(|source| Error::LaunchFailed {
        application: application.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(names: &[&str]) -> Result<DispatchRequest> {
        DispatchRequest::new(names.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn test_two_files_is_diff_mode() {
        let request = request(&["a.txt", "b.txt"]).unwrap();
        assert_eq!(request.mode(), CompareMode::Diff);
    }

    #[test]
    fn test_four_files_is_merge_mode() {
        let request = request(&["base.seq", "local.seq", "remote.seq", "merged.seq"]).unwrap();
        assert_eq!(request.mode(), CompareMode::Merge);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_other_counts_are_rejected(#[case] count: usize) {
        let names: Vec<PathBuf> = (0..count).map(|i| PathBuf::from(format!("f{i}.txt"))).collect();
        let result = DispatchRequest::new(names);
        assert!(matches!(result, Err(Error::WrongArgumentCount { .. })));
    }
}
