//! File-backed logging bootstrap
//!
//! Each binary appends timestamped lines to its own log file next to the
//! executable. When the log file cannot be opened the subscriber falls back
//! to stdout; logging problems never abort the operation itself.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::paths;

/// Initialize logging to `<executable dir>/<file_name>`.
///
/// The level defaults to `info` and can be raised through `RUST_LOG`.
pub fn init(file_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let path = paths::executable_dir().join(file_name);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => {
            println!("Failed to open log file '{}': {e}", path.display());
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{info, warn};

    #[test]
    fn test_init_is_safe_to_call_twice() {
        init("exttool-test.log");
        init("exttool-test.log");

        info!("info line");
        warn!("warn line");
    }
}
