//! Top-level error type of a sync run.

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::translation::TranslationError;
use crate::scanner::ScanError;

/// Defines errors that abort a synchronization run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Error when the workspace configuration cannot be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Error when the locales directory cannot be scanned
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Error when a translation file cannot be read, parsed or written
    #[error(transparent)]
    Translation(#[from] TranslationError),
}
