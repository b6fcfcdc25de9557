//! JSON document loading and saving
//!
//! All persisted documents in this workspace are JSON; writes are
//! pretty-printed so operators can edit them by hand.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Load a JSON document from a file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|e| Error::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save a value as an indented JSON document.
///
/// Uses atomic write to prevent corruption.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| Error::JsonSerialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    io::write_atomic(path, content.as_bytes())
}
