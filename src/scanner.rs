//! Locale discovery under the locales root.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use thiserror::Error;

use crate::config::SyncSettings;

/// Errors raised while listing locales
#[derive(Error, Debug)]
pub enum ScanError {
    /// Error when the locales root cannot be listed
    #[error("Failed to read locales directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Error when an exclusion pattern does not compile
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// Glob compilation error
        #[source]
        source: globset::Error,
    },
}

/// Lists the locales that should be reconciled against the base locale.
#[derive(Debug, Clone)]
pub struct LocaleScanner {
    /// Directory name of the base locale, never reported
    base_locale: String,
    /// Locale names to skip
    exclude_set: GlobSet,
}

impl LocaleScanner {
    /// Creates a scanner that skips `base_locale` and any name matching `exclude_patterns`.
    ///
    /// # Errors
    /// Returns error if an exclusion pattern is not a valid glob.
    pub fn new(base_locale: &str, exclude_patterns: &[String]) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude_set = builder.build().map_err(|source| ScanError::InvalidPattern {
            pattern: exclude_patterns.join(", "),
            source,
        })?;

        Ok(Self { base_locale: base_locale.to_string(), exclude_set })
    }

    /// Creates a scanner from the `baseLocale` and `excludeLocales` settings.
    ///
    /// # Errors
    /// Returns error if an exclusion pattern is not a valid glob.
    pub fn from_settings(settings: &SyncSettings) -> Result<Self, ScanError> {
        Self::new(&settings.base_locale, &settings.exclude_locales)
    }

    /// Returns every locale directory in `locales_root` except the base locale,
    /// sorted by name.
    ///
    /// # Errors
    /// Returns error if the directory is missing or cannot be listed.
    pub fn scan(&self, locales_root: &Path) -> Result<Vec<String>, ScanError> {
        tracing::debug!(locales_root = %locales_root.display(), "Scanning locales");

        let read_dir_err =
            |source| ScanError::ReadDir { path: locales_root.to_path_buf(), source };

        let mut locales = Vec::new();
        for result in std::fs::read_dir(locales_root).map_err(read_dir_err)? {
            let entry = result.map_err(read_dir_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name == self.base_locale {
                continue;
            }

            // stray files such as .DS_Store are not locales
            if !entry.path().is_dir() {
                tracing::debug!(entry = %name, "Skipping non-directory entry");
                continue;
            }

            if self.exclude_set.is_match(&name) {
                tracing::debug!(locale = %name, "Skipping excluded locale");
                continue;
            }

            locales.push(name);
        }

        locales.sort();
        Ok(locales)
    }
}
