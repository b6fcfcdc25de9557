//! Launch dispatcher for the Git external diff/merge tool.
//!
//! Git hands this crate two file paths (diff) or four (merge). The
//! dispatcher derives a single extension class from them, resolves the class
//! to a comparison application through the persisted extension mapping (with
//! the configured default Git client as fallback), works around files held
//! open by the invoking client, then launches the application and blocks
//! until it exits.
//!
//! Every failure is terminal for the invocation: there are no retries, and
//! nothing escapes [`dispatch`] as an error — failures are logged and
//! surfaced as `false`.

pub mod dispatch;
pub mod error;
pub mod extensions;
pub mod locked;
pub mod store;

pub use dispatch::{CompareMode, DispatchRequest, dispatch};
pub use error::{Error, Result};
pub use store::{ExtensionMapping, ToolStore};
