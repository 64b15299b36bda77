//! Translation file input and output.
//!
//! A translation file is a flat JSON object mapping keys to strings. Files are
//! always written back with keys sorted, 4-space indentation and non-ASCII
//! text left unescaped.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use serde::Serialize;
use serde_json::ser::{
    PrettyFormatter,
    Serializer,
};
use thiserror::Error;

/// Flat translation mapping for one locale.
///
/// A `BTreeMap` keeps keys in code-point order, which is the order they are
/// written in.
pub type TranslationMap = BTreeMap<String, String>;

/// Indentation unit of written files
const INDENT: &[u8] = b"    ";

/// Errors raised while reading or writing a translation file
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error when the file cannot be read or written
    #[error("Failed to access translation file {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Error when the file is not a flat string-to-string JSON object
    #[error("Failed to parse translation file {}: {source}", path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// JSON decoding error
        #[source]
        source: serde_json::Error,
    },
    /// Error when the mapping cannot be encoded
    #[error("Failed to serialize translation file {}: {source}", path.display())]
    Serialize {
        /// File that was about to be written
        path: PathBuf,
        /// JSON encoding error
        #[source]
        source: serde_json::Error,
    },
}

/// Parse JSON text into a [`TranslationMap`].
///
/// Nested objects, arrays and non-string scalars are rejected. When a key is
/// repeated the last occurrence wins.
///
/// # Errors
/// Returns the `serde_json` error for malformed JSON or non-string values.
pub fn parse_translation(json_text: &str) -> Result<TranslationMap, serde_json::Error> {
    serde_json::from_str(json_text)
}

/// Encode a mapping in the on-disk format.
///
/// # Examples
/// ```
/// use locale_sync::input::translation::{TranslationMap, to_json_text};
///
/// let mut map = TranslationMap::new();
/// map.insert("b".to_string(), "Été".to_string());
/// map.insert("a".to_string(), "A".to_string());
///
/// let text = to_json_text(&map).unwrap();
/// assert_eq!(text, "{\n    \"a\": \"A\",\n    \"b\": \"Été\"\n}");
/// ```
///
/// # Errors
/// Returns the `serde_json` error if serialization fails.
pub fn to_json_text(map: &TranslationMap) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    map.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| {
        serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Load a translation file.
///
/// # Errors
/// Returns error if file read or JSON parse fails.
pub fn load_translation_file(file_path: &Path) -> Result<TranslationMap, TranslationError> {
    tracing::debug!(path = %file_path.display(), "Loading translation file");

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| TranslationError::Io { path: file_path.to_path_buf(), source })?;

    parse_translation(&content)
        .map_err(|source| TranslationError::Parse { path: file_path.to_path_buf(), source })
}

/// Overwrite a translation file with `map`, keys sorted.
///
/// The write is a plain overwrite of the existing file.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn write_translation_file(
    file_path: &Path,
    map: &TranslationMap,
) -> Result<(), TranslationError> {
    let text = to_json_text(map)
        .map_err(|source| TranslationError::Serialize { path: file_path.to_path_buf(), source })?;

    std::fs::write(file_path, text)
        .map_err(|source| TranslationError::Io { path: file_path.to_path_buf(), source })?;

    tracing::debug!(path = %file_path.display(), keys = map.len(), "Wrote translation file");
    Ok(())
}
