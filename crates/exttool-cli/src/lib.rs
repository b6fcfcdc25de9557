//! Shared bootstrap for the configurator and launcher binaries

pub mod logging;
pub mod paths;
