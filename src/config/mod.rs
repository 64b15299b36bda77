//! Workspace configuration: the `.locale-sync.json` file and its validation.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_workspace,
};
pub use types::{
    ConfigError,
    SyncSettings,
    ValidationError,
};
