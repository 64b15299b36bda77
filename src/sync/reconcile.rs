//! Key-set reconciliation of one locale against the base locale.

use crate::input::translation::TranslationMap;

/// Keys changed while reconciling one locale, each list sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Base keys the locale lacked, now filled with the base value.
    pub missing: Vec<String>,
    /// Locale keys the base does not have, now deleted.
    pub redundant: Vec<String>,
}

impl KeyDiff {
    /// True when the locale already had the base key set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.redundant.is_empty()
    }
}

/// Brings `locale` to exactly the key set of `base`.
///
/// Missing keys are copied from `base`; redundant keys are removed. Values of
/// keys already present in both are left alone.
pub fn reconcile(base: &TranslationMap, locale: &mut TranslationMap) -> KeyDiff {
    let missing: Vec<String> =
        base.keys().filter(|key| !locale.contains_key(*key)).cloned().collect();
    let redundant: Vec<String> =
        locale.keys().filter(|key| !base.contains_key(*key)).cloned().collect();

    for key in &missing {
        if let Some(value) = base.get(key) {
            locale.insert(key.clone(), value.clone());
        }
    }
    for key in &redundant {
        locale.remove(key);
    }

    KeyDiff { missing, redundant }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Builds a mapping from literal pairs
    fn map(pairs: &[(&str, &str)]) -> TranslationMap {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[rstest]
    fn test_reconcile_adds_removes_and_preserves() {
        let base = map(&[("a", "A"), ("b", "B")]);
        let mut fr = map(&[("b", "Bfr"), ("c", "Cfr")]);

        let diff = reconcile(&base, &mut fr);

        assert_eq!(fr, map(&[("a", "A"), ("b", "Bfr")]));
        assert_eq!(diff.missing, vec!["a"]);
        assert_eq!(diff.redundant, vec!["c"]);
    }

    #[googletest::test]
    fn test_reconcile_matching_key_sets_is_noop() {
        let base = map(&[("a", "A"), ("b", "B")]);
        let mut de = map(&[("a", "Ade"), ("b", "Bde")]);

        let diff = reconcile(&base, &mut de);

        expect_that!(diff.is_empty(), eq(true));
        expect_that!(de.get("a"), some(eq(&"Ade".to_string())));
        expect_that!(de.get("b"), some(eq(&"Bde".to_string())));
    }

    #[rstest]
    fn test_reconcile_empty_locale_takes_all_base_values() {
        let base = map(&[("x", "X"), ("y", "Y")]);
        let mut ja = TranslationMap::new();

        let diff = reconcile(&base, &mut ja);

        assert_eq!(ja, base);
        assert_eq!(diff.missing, vec!["x", "y"]);
        assert!(diff.redundant.is_empty());
    }

    #[rstest]
    fn test_reconcile_empty_base_clears_locale() {
        let base = TranslationMap::new();
        let mut ja = map(&[("old", "古い")]);

        let diff = reconcile(&base, &mut ja);

        assert!(ja.is_empty());
        assert_eq!(diff.redundant, vec!["old"]);
    }

    #[rstest]
    fn test_reconcile_diff_lists_are_sorted() {
        let base = map(&[("z", "Z"), ("m", "M"), ("a", "A")]);
        let mut it = map(&[("q", "Q"), ("c", "C")]);

        let diff = reconcile(&base, &mut it);

        assert_eq!(diff.missing, vec!["a", "m", "z"]);
        assert_eq!(diff.redundant, vec!["c", "q"]);
    }

    #[rstest]
    fn test_reconcile_is_idempotent() {
        let base = map(&[("a", "A"), ("b", "B")]);
        let mut fr = map(&[("b", "Bfr"), ("c", "Cfr")]);
        reconcile(&base, &mut fr);
        let after_first = fr.clone();

        let diff = reconcile(&base, &mut fr);

        assert!(diff.is_empty());
        assert_eq!(fr, after_first);
    }
}
