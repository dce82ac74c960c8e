//! Placeholder substitution over a materialized project
//!
//! Rewrites a declared subset of project files in place, replacing every
//! literal occurrence of each placeholder token with its value. Tokens are
//! matched as plain text, never compiled into a pattern, so a token
//! containing `.` or `*` only ever matches itself.
//!
//! The pass never aborts early: a target missing from the project is
//! recorded and skipped, and an I/O failure on one file still lets the
//! remaining files be processed. The caller reads the aggregate report to
//! decide whether the run as a whole succeeded.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use basta::inject::{self, PlaceholderMap};
//!
//! let mut map = PlaceholderMap::new();
//! map.insert("__APP_NAME__", "my-app");
//!
//! let report = inject::apply(Path::new("my-app"), &["package.json"], &map);
//! assert!(report.success());
//! ```

mod internal;

use std::io;
use std::path::{Path, PathBuf};

/// Ordered token → replacement mapping.
///
/// Keys are unique; insertion keeps first-declaration position and
/// application walks the entries in that order, one pass per token with no
/// rescanning. A later token may match text introduced by an earlier
/// value. Re-applying the same map to already-substituted content is a
/// no-op only when no value contains another token as a substring.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token, or update its value while keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What happened to a single substitution target.
#[derive(Debug)]
pub enum Outcome {
    /// The file existed; every token occurrence was replaced and the file
    /// was rewritten.
    Applied,
    /// The file is not present in the materialized project.
    SkippedMissing,
    /// The file could not be read or written.
    Failed(io::Error),
}

/// Outcome for one target path (relative to the project root).
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Aggregate result of one substitution pass, in target declaration order.
#[derive(Debug, Default)]
pub struct InjectReport {
    pub files: Vec<FileReport>,
}

impl InjectReport {
    /// True when no target failed. Skipped targets do not count against
    /// success, since templates may omit optional files.
    pub fn success(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Failed(_)))
            .count()
    }
}

/// Rewrite each target under `root`, in declaration order.
pub fn apply(root: &Path, targets: &[&str], map: &PlaceholderMap) -> InjectReport {
    internal::apply(root, targets, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn map_of(pairs: &[(&str, &str)]) -> PlaceholderMap {
        let mut map = PlaceholderMap::new();
        for (key, value) in pairs {
            map.insert(*key, *value);
        }
        map
    }

    #[test]
    fn test_literal_substitution() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name":"__APP_NAME__"}"#).unwrap();

        let report = apply(
            temp.path(),
            &["package.json"],
            &map_of(&[("__APP_NAME__", "my-app")]),
        );

        assert!(report.success());
        assert!(matches!(report.files[0].outcome, Outcome::Applied));
        assert_eq!(
            fs::read_to_string(temp.path().join("package.json")).unwrap(),
            r#"{"name":"my-app"}"#
        );
    }

    #[test]
    fn test_token_metacharacters_match_only_themselves() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("conf.txt"), "axb stays, a.b goes").unwrap();

        let report = apply(temp.path(), &["conf.txt"], &map_of(&[("a.b", "X")]));

        assert!(report.success());
        assert_eq!(
            fs::read_to_string(temp.path().join("conf.txt")).unwrap(),
            "axb stays, X goes"
        );
    }

    #[test]
    fn test_missing_target_is_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "__TOKEN__").unwrap();
        fs::write(temp.path().join("b.txt"), "__TOKEN__").unwrap();

        let report = apply(
            temp.path(),
            &["a.txt", "missing.txt", "b.txt"],
            &map_of(&[("__TOKEN__", "value")]),
        );

        assert!(report.success());
        assert!(matches!(report.files[0].outcome, Outcome::Applied));
        assert!(matches!(report.files[1].outcome, Outcome::SkippedMissing));
        assert!(matches!(report.files[2].outcome, Outcome::Applied));
        assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "value");
        assert_eq!(fs::read_to_string(temp.path().join("b.txt")).unwrap(), "value");
    }

    #[test]
    fn test_unreadable_target_fails_without_stopping_the_rest() {
        let temp = TempDir::new().unwrap();
        // Not valid UTF-8, so the read fails.
        fs::write(temp.path().join("binary.dat"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
        fs::write(temp.path().join("after.txt"), "__TOKEN__").unwrap();

        let report = apply(
            temp.path(),
            &["binary.dat", "after.txt"],
            &map_of(&[("__TOKEN__", "value")]),
        );

        assert!(!report.success());
        assert_eq!(report.failed_count(), 1);
        assert!(matches!(report.files[0].outcome, Outcome::Failed(_)));
        assert!(matches!(report.files[1].outcome, Outcome::Applied));
        assert_eq!(
            fs::read_to_string(temp.path().join("after.txt")).unwrap(),
            "value"
        );
    }

    #[test]
    fn test_tokens_apply_in_declaration_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f.txt"), "__A__").unwrap();

        // __A__'s value introduces __B__, which the later token rewrites.
        let report = apply(
            temp.path(),
            &["f.txt"],
            &map_of(&[("__A__", "see __B__"), ("__B__", "here")]),
        );

        assert!(report.success());
        assert_eq!(
            fs::read_to_string(temp.path().join("f.txt")).unwrap(),
            "see here"
        );
    }

    #[test]
    fn test_insert_updates_value_in_place() {
        let mut map = map_of(&[("__A__", "1"), ("__B__", "2")]);
        map.insert("__A__", "3");

        assert_eq!(map.len(), 2);
        assert_eq!(map.entries()[0], ("__A__".to_string(), "3".to_string()));
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "__TOKEN__").unwrap();

        apply(temp.path(), &["a.txt"], &map_of(&[("__TOKEN__", "value")]));

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["a.txt"]);
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "abc").unwrap();

        let report = apply(temp.path(), &["a.txt"], &map_of(&[("", "X")]));

        assert!(report.success());
        assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "abc");
    }

    #[test]
    fn test_empty_map_still_reports_applied() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "untouched").unwrap();

        let report = apply(temp.path(), &["a.txt"], &PlaceholderMap::new());

        assert!(report.success());
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "untouched"
        );
    }
}
