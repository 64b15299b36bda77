//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// `<root>/<locale>/translation.json` に内容を書き込む
pub(crate) fn write_locale(root: &Path, locale: &str, content: &str) {
    let dir = root.join(locale);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("translation.json"), content).unwrap();
}

/// `<root>/<locale>/translation.json` の内容を読み込む
pub(crate) fn read_locale(root: &Path, locale: &str) -> String {
    fs::read_to_string(root.join(locale).join("translation.json")).unwrap()
}

/// テスト用のロケールディレクトリを作成する
///
/// # Arguments
/// * `locales` - ロケール名とファイル内容の組
pub(crate) fn create_locales_root(locales: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (locale, content) in locales {
        write_locale(temp_dir.path(), locale, content);
    }
    temp_dir
}
