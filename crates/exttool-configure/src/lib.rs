//! Git client configurators for the external diff/merge tool.
//!
//! Registers the sequence-file diff/merge launcher with third-party Git
//! clients by patching the relevant git-config files. The two operations
//! every client shares — creating a default request file and configuring
//! from one — live on the [`ClientConfigurator`] trait; clients differ only
//! in discovery and config-file conventions.
//!
//! # Architecture
//!
//! - [`stanza`] is the line-oriented patcher that inserts or updates the
//!   tool registration block inside an existing git-config file.
//! - [`levels`] resolves a configuration level (repo, client, global) to the
//!   concrete files to patch and aggregates per-file results.
//! - [`locate`] discovers client installations; [`setup`] installs the
//!   launcher and its side-files and hands back the launcher path that is
//!   threaded through the rest of the run.

pub mod client;
pub mod configurator;
pub mod differ;
pub mod error;
pub mod gitcola;
pub mod gitkraken;
pub mod gitpath;
pub mod levels;
pub mod locate;
pub mod setup;
pub mod sourcetree;
pub mod stanza;
pub mod visual_studio;

pub use client::{ClientDescriptor, ClientKind, ConfigLevel, ConfigurationRequest};
pub use configurator::{ClientConfigurator, configurator_for};
pub use error::{Error, Result};
