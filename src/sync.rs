//! One synchronization run over a locales directory.
//!
//! The run normalizes the base locale file, loads every other locale, then
//! reconciles and rewrites each of them in name order. Any error aborts the
//! run; files already rewritten stay rewritten.

pub mod reconcile;

use std::path::Path;

use crate::config::{
    ConfigError,
    SyncSettings,
    load_from_workspace,
};
use crate::error::SyncError;
use crate::input::translation::{
    TranslationMap,
    load_translation_file,
    write_translation_file,
};
use crate::scanner::LocaleScanner;
pub use reconcile::{
    KeyDiff,
    reconcile,
};

/// Outcome for one reconciled locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    /// Locale directory name
    pub locale: String,
    /// Keys added and removed
    pub diff: KeyDiff,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of keys in the base locale
    pub base_key_count: usize,
    /// Reconciled locales in processing order
    pub locales: Vec<LocaleReport>,
}

impl SyncReport {
    /// True when no locale gained or lost a key.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.locales.iter().all(|report| report.diff.is_empty())
    }
}

/// Loads `.locale-sync.json` from `workspace_root` (or uses defaults) and runs
/// a sync over the configured locales directory.
///
/// # Errors
/// Returns the first configuration, scan or translation file error.
pub fn sync_workspace(workspace_root: &Path) -> Result<SyncReport, SyncError> {
    let settings = load_from_workspace(workspace_root)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded: {:?}", settings);

    sync_locales(&settings.locales_root(workspace_root), &settings)
}

/// Runs a sync over `locales_root` with the given settings.
///
/// # Errors
/// Returns the first scan or translation file error.
pub fn sync_locales(
    locales_root: &Path,
    settings: &SyncSettings,
) -> Result<SyncReport, SyncError> {
    let base_path = settings.translation_path(locales_root, &settings.base_locale);
    let base = load_translation_file(&base_path)?;
    write_translation_file(&base_path, &base)?;
    tracing::debug!(locale = %settings.base_locale, keys = base.len(), "Normalized base locale");

    let scanner = LocaleScanner::from_settings(settings)?;
    let mut loaded: Vec<(String, TranslationMap)> = Vec::new();
    for locale in scanner.scan(locales_root)? {
        let map = load_translation_file(&settings.translation_path(locales_root, &locale))?;
        loaded.push((locale, map));
    }

    let mut report = SyncReport { base_key_count: base.len(), locales: Vec::new() };
    for (locale, mut map) in loaded {
        let diff = reconcile(&base, &mut map);
        log_diff(&locale, &diff);
        write_translation_file(&settings.translation_path(locales_root, &locale), &map)?;
        report.locales.push(LocaleReport { locale, diff });
    }

    Ok(report)
}

/// Logs each changed key and a per-locale summary.
fn log_diff(locale: &str, diff: &KeyDiff) {
    for key in &diff.missing {
        tracing::debug!(locale, key = %key, "Added missing key from base locale");
    }
    for key in &diff.redundant {
        tracing::warn!(locale, key = %key, "Removed key not present in base locale");
    }
    tracing::info!(
        locale,
        added = diff.missing.len(),
        removed = diff.redundant.len(),
        "Synchronized locale"
    );
}
