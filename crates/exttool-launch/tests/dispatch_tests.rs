//! End-to-end dispatcher tests
//!
//! The launched "application" is a tiny shell script that records its
//! argument list, so the tests can observe what was (or was not) executed.

use std::fs;
use std::path::{Path, PathBuf};

use exttool_launch::store::builtin_mappings;
use exttool_launch::{DispatchRequest, ExtensionMapping, ToolStore, dispatch};

fn store_in(dir: &Path) -> ToolStore {
    ToolStore::new(dir)
}

fn request(files: &[PathBuf]) -> DispatchRequest {
    DispatchRequest::new(files.to_vec()).unwrap()
}

fn touch(path: &Path) {
    fs::write(path, "content").unwrap();
}

#[cfg(unix)]
fn recording_app(dir: &Path) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("invocation.log");
    let app = dir.join("record.sh");
    fs::write(&app, format!("#!/bin/sh\necho \"$@\" > '{}'\n", log.display())).unwrap();
    fs::set_permissions(&app, fs::Permissions::from_mode(0o755)).unwrap();
    (app, log)
}

#[test]
fn test_first_dispatch_creates_builtin_mapping_file() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(temp.path());

    let a = temp.path().join("a.xyz");
    let b = temp.path().join("b.xyz");
    touch(&a);
    touch(&b);

    // No mapping entry for .XYZ and no default client: the launch fails
    // cleanly, but the mapping file has been seeded with the defaults.
    let ok = dispatch(&request(&[a, b]), &store);

    assert!(!ok);
    let written: Vec<ExtensionMapping> =
        serde_json::from_str(&fs::read_to_string(store.mapping_path()).unwrap()).unwrap();
    assert_eq!(written, builtin_mappings());
}

#[test]
fn test_empty_default_client_fails_cleanly() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(temp.path());

    exttool_fs::json::save(&store.default_client_path(), &String::new()).unwrap();

    let a = temp.path().join("a.xyz");
    let b = temp.path().join("b.xyz");
    touch(&a);
    touch(&b);

    // Resolves to an empty application path; the launch attempt fails but
    // nothing panics and nothing escapes.
    assert!(!dispatch(&request(&[a, b]), &store));
}

#[cfg(unix)]
#[test]
fn test_mismatched_extensions_abort_without_launching() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(temp.path());
    let (app, log) = recording_app(temp.path());

    exttool_fs::json::save(
        &store.mapping_path(),
        &vec![
            ExtensionMapping {
                file_extension: ".txt".to_string(),
                application_path: app.clone(),
            },
            ExtensionMapping {
                file_extension: ".doc".to_string(),
                application_path: app,
            },
        ],
    )
    .unwrap();

    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.doc");
    touch(&a);
    touch(&b);

    let ok = dispatch(&request(&[a, b]), &store);

    assert!(!ok);
    assert!(!log.exists(), "no process must be launched on mismatch");
}

#[cfg(unix)]
#[test]
fn test_mapped_application_is_launched_case_insensitively() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(temp.path());
    let (app, log) = recording_app(temp.path());

    // Lower-case entry must match the upper-cased extension class.
    exttool_fs::json::save(
        &store.mapping_path(),
        &vec![ExtensionMapping {
            file_extension: ".txt".to_string(),
            application_path: app,
        }],
    )
    .unwrap();

    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    touch(&a);
    touch(&b);

    let ok = dispatch(&request(&[a.clone(), b.clone()]), &store);

    assert!(ok);
    let recorded = fs::read_to_string(&log).unwrap();
    assert!(recorded.contains(a.to_str().unwrap()));
    assert!(recorded.contains(b.to_str().unwrap()));
}

#[cfg(unix)]
#[test]
fn test_unmapped_extension_falls_back_to_default_client() {
    let temp = tempfile::tempdir().unwrap();
    let store = store_in(temp.path());
    let (app, log) = recording_app(temp.path());

    store.load_or_create_mappings().unwrap();
    exttool_fs::json::save(&store.default_client_path(), &app.to_string_lossy()).unwrap();

    let a = temp.path().join("a.log");
    let b = temp.path().join("b.log");
    touch(&a);
    touch(&b);

    let ok = dispatch(&request(&[a, b]), &store);

    assert!(ok);
    assert!(log.exists());
}

#[cfg(unix)]
#[test]
fn test_locked_source_is_replaced_by_copy() {
    use fs2::FileExt;

    let temp = tempfile::tempdir().unwrap();
    let store = store_in(temp.path());
    let (app, log) = recording_app(temp.path());

    exttool_fs::json::save(
        &store.mapping_path(),
        &vec![ExtensionMapping {
            file_extension: ".txt".to_string(),
            application_path: app,
        }],
    )
    .unwrap();

    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    fs::write(&a, "locked content").unwrap();
    touch(&b);

    let holder = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(&a)
        .unwrap();
    holder.lock_exclusive().unwrap();

    let ok = dispatch(&request(&[a.clone(), b]), &store);

    assert!(ok);
    let copy = temp.path().join("Copy_a.txt");
    assert!(copy.is_file());
    assert_eq!(fs::read_to_string(&copy).unwrap(), "locked content");
    // The tool was handed the copy, not the locked original.
    let recorded = fs::read_to_string(&log).unwrap();
    assert!(recorded.contains("Copy_a.txt"));
    // The original is untouched.
    assert_eq!(fs::read_to_string(&a).unwrap(), "locked content");
}
