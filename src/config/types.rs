//! Configuration types and validation.

use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A single problem found in the configuration file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludeLocales[0]")
    pub field_path: String,
    /// Human readable description of the problem
    pub message: String,
}

impl ValidationError {
    /// Creates an error for the field at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file parsed but failed validation
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The file could not be read
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid JSON for `SyncSettings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Formats validation errors as a numbered list, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings read from `.locale-sync.json`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSettings {
    /// Directory holding one subdirectory per locale.
    /// Relative paths are resolved against the workspace root.
    pub locales_dir: PathBuf,

    /// Locale whose key set every other locale is brought in line with.
    pub base_locale: String,

    /// File name of the mapping inside each locale directory.
    pub translation_file: String,

    /// Glob patterns for locale directory names to leave untouched.
    pub exclude_locales: Vec<String>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("public/locales"),
            base_locale: "en".to_string(),
            translation_file: "translation.json".to_string(),
            exclude_locales: Vec::new(),
        }
    }
}

/// True when `name` cannot stand for a single child entry of a directory.
fn is_not_single_component(name: &str) -> bool {
    name == "." || name == ".." || name.contains(['/', '\\'])
}

impl SyncSettings {
    /// Checks every field and collects all problems found.
    ///
    /// # Errors
    /// - Required field is empty
    /// - Locale or file name is `.`, `..` or contains a path separator
    /// - Invalid glob pattern
    /// - Exclusion pattern matches the base locale
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locales_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"public/locales\"",
            ));
        }

        if self.base_locale.is_empty() {
            errors.push(ValidationError::new(
                "baseLocale",
                "The base locale cannot be empty. Example: \"en\"",
            ));
        } else if is_not_single_component(&self.base_locale) {
            errors.push(ValidationError::new(
                "baseLocale",
                format!("'{}' must be a directory name, not a path", self.base_locale),
            ));
        }

        if self.translation_file.is_empty() {
            errors.push(ValidationError::new(
                "translationFile",
                "The file name cannot be empty. Example: \"translation.json\"",
            ));
        } else if is_not_single_component(&self.translation_file) {
            errors.push(ValidationError::new(
                "translationFile",
                format!("'{}' must be a file name, not a path", self.translation_file),
            ));
        }

        for (index, pattern) in self.exclude_locales.iter().enumerate() {
            match globset::Glob::new(pattern) {
                Err(e) => errors.push(ValidationError::new(
                    format!("excludeLocales[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                )),
                Ok(glob) if glob.compile_matcher().is_match(&self.base_locale) => {
                    errors.push(ValidationError::new(
                        format!("excludeLocales[{index}]"),
                        format!(
                            "Pattern '{pattern}' excludes the base locale '{}'",
                            self.base_locale
                        ),
                    ));
                }
                Ok(_) => {}
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Locales root for the given workspace.
    #[must_use]
    pub fn locales_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.locales_dir)
    }

    /// Path of the mapping file owned by `locale`.
    #[must_use]
    pub fn translation_path(&self, locales_root: &Path, locale: &str) -> PathBuf {
        locales_root.join(locale).join(&self.translation_file)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_default_settings_are_valid() {
        let settings = SyncSettings::default();

        expect_that!(settings.validate().is_ok(), eq(true));
        expect_that!(settings.base_locale.as_str(), eq("en"));
        expect_that!(settings.translation_file.as_str(), eq("translation.json"));
    }

    #[googletest::test]
    fn test_deserialize_camel_case_with_defaults() {
        let settings: SyncSettings =
            serde_json::from_str(r#"{"baseLocale": "ja", "excludeLocales": ["x-*"]}"#).unwrap();

        expect_that!(settings.base_locale.as_str(), eq("ja"));
        expect_that!(settings.exclude_locales.len(), eq(1));
        assert_eq!(settings.locales_dir, PathBuf::from("public/locales"));
        expect_that!(settings.translation_file.as_str(), eq("translation.json"));
    }

    #[rstest]
    #[case(r#"{"localesDir": ""}"#, "localesDir")]
    #[case(r#"{"baseLocale": ""}"#, "baseLocale")]
    #[case(r#"{"baseLocale": "en/US"}"#, "baseLocale")]
    #[case(r#"{"baseLocale": ".."}"#, "baseLocale")]
    #[case(r#"{"baseLocale": "."}"#, "baseLocale")]
    #[case(r#"{"translationFile": ".."}"#, "translationFile")]
    #[case(r#"{"translationFile": ""}"#, "translationFile")]
    #[case(r#"{"translationFile": "a\\b.json"}"#, "translationFile")]
    #[case(r#"{"excludeLocales": ["[invalid"]}"#, "excludeLocales[0]")]
    #[case(r#"{"excludeLocales": ["fr", "e*"]}"#, "excludeLocales[1]")]
    fn test_validate_rejects(#[case] json: &str, #[case] field: &str) {
        let settings: SyncSettings = serde_json::from_str(json).unwrap();

        let errors = settings.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_path, field);
    }

    #[rstest]
    fn test_validate_collects_every_error() {
        let settings = SyncSettings {
            locales_dir: PathBuf::new(),
            base_locale: String::new(),
            translation_file: String::new(),
            exclude_locales: vec!["[".to_string()],
        };

        let errors = settings.validate().unwrap_err();

        assert_eq!(errors.len(), 4);
    }

    #[rstest]
    fn test_validation_error_message_lists_fields() {
        let err = ConfigError::ValidationErrors(vec![
            ValidationError::new("baseLocale", "empty"),
            ValidationError::new("translationFile", "empty"),
        ]);

        let message = err.to_string();

        assert!(message.contains("1. baseLocale - empty"));
        assert!(message.contains("2. translationFile - empty"));
    }

    #[rstest]
    fn test_translation_path_layout() {
        let settings = SyncSettings::default();
        let root = settings.locales_root(Path::new("/work"));

        assert_eq!(root, PathBuf::from("/work/public/locales"));
        assert_eq!(
            settings.translation_path(&root, "fr"),
            PathBuf::from("/work/public/locales/fr/translation.json")
        );
    }
}
