//! locale-sync
//!
//! Keeps every locale's `translation.json` in step with a base locale: missing
//! keys are filled from the base, extra keys are dropped, and every file is
//! rewritten with its keys sorted.

pub mod config;
pub mod error;
pub mod input;
pub mod scanner;
pub mod sync;
mod test_utils;

pub use error::SyncError;
pub use sync::{
    SyncReport,
    sync_workspace,
};
