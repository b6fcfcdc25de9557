//! Extension-class derivation for dispatch requests
//!
//! The comparison application is selected by file extension, so all supplied
//! paths must agree on one. Extensions are compared uppercased, and the
//! synthetic three-way names some clients give merge inputs collapse to the
//! canonical sequence extension first.

use std::path::Path;

use crate::{Error, Result};

/// Synthetic extensions used by clients that rename the three merge inputs
/// of a sequence file.
pub const SYNTHETIC_MERGE_EXTENSIONS: [&str; 3] = [".SEQ-BASE", ".SEQ-OURS", ".SEQ-THEIRS"];

/// Extension class the synthetic merge names collapse to.
pub const CANONICAL_SEQUENCE_EXTENSION: &str = ".SEQ";

/// Uppercased extension of a path, dot included; empty when the path has
/// no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_uppercase()))
        .unwrap_or_default()
}

fn is_synthetic_merge_extension(extension: &str) -> bool {
    SYNTHETIC_MERGE_EXTENSIONS.contains(&extension)
}

/// Derive the single extension class shared by all supplied files.
///
/// When the first three extensions are all members of the synthetic
/// merge-conflict set they are rewritten to [`CANONICAL_SEQUENCE_EXTENSION`]
/// before the agreement check. Disagreement is an error and aborts dispatch.
pub fn extension_class<P: AsRef<Path>>(files: &[P]) -> Result<String> {
    let mut extensions: Vec<String> = files
        .iter()
        .map(|file| extension_of(file.as_ref()))
        .collect();

    if extensions.len() >= 3
        && extensions[..3]
            .iter()
            .all(|ext| is_synthetic_merge_extension(ext))
    {
        for ext in extensions.iter_mut().take(3) {
            *ext = CANONICAL_SEQUENCE_EXTENSION.to_string();
        }
    }

    if extensions.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(Error::extension_mismatch(&extensions));
    }

    Ok(extensions.into_iter().next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[rstest]
    #[case("a.txt", ".TXT")]
    #[case("a.Seq", ".SEQ")]
    #[case("conflict.SEQ-BASE", ".SEQ-BASE")]
    #[case("archive.tar.gz", ".GZ")]
    #[case("Makefile", "")]
    fn test_extension_of(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(extension_of(Path::new(name)), expected);
    }

    #[test]
    fn test_diff_pair_agrees() {
        let class = extension_class(&paths(&["a.txt", "b.txt"])).unwrap();
        assert_eq!(class, ".TXT");
    }

    #[test]
    fn test_diff_pair_mismatch_is_error() {
        let result = extension_class(&paths(&["a.txt", "b.doc"]));
        assert!(matches!(result, Err(Error::ExtensionMismatch { .. })));
    }

    #[test]
    fn test_merge_quad_agrees() {
        let class = extension_class(&paths(&["base.seq", "local.seq", "remote.seq", "merged.seq"]))
            .unwrap();
        assert_eq!(class, ".SEQ");
    }

    #[test]
    fn test_synthetic_merge_extensions_collapse() {
        let class = extension_class(&paths(&[
            "f.SEQ-BASE",
            "f.SEQ-OURS",
            "f.SEQ-THEIRS",
            "f.seq",
        ]))
        .unwrap();
        assert_eq!(class, ".SEQ");
    }

    #[test]
    fn test_synthetic_set_requires_all_three() {
        // Only two synthetic names: no collapse, so the extensions disagree.
        let result = extension_class(&paths(&["f.SEQ-BASE", "f.SEQ-OURS", "f.seq", "f.seq"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_extensionless_pair_agrees_on_empty_class() {
        let class = extension_class(&paths(&["LICENSE", "COPYING"])).unwrap();
        assert_eq!(class, "");
    }
}
