//! Internal implementation for placeholder substitution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{FileReport, InjectReport, Outcome, PlaceholderMap};

pub(super) fn apply(root: &Path, targets: &[&str], map: &PlaceholderMap) -> InjectReport {
    let mut report = InjectReport::default();
    for target in targets {
        report.files.push(FileReport {
            path: PathBuf::from(target),
            outcome: apply_one(&root.join(target), map),
        });
    }
    report
}

fn apply_one(path: &Path, map: &PlaceholderMap) -> Outcome {
    if !path.exists() {
        return Outcome::SkippedMissing;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return Outcome::Failed(err),
    };

    match replace_file(path, &substitute(&content, map)) {
        Ok(()) => Outcome::Applied,
        Err(err) => Outcome::Failed(err),
    }
}

/// One pass per token, in map declaration order. `str::replace` matches the
/// token as literal text. An empty token would match between every
/// character, so those are skipped.
fn substitute(content: &str, map: &PlaceholderMap) -> String {
    map.entries()
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .fold(content.to_string(), |acc, (key, value)| {
            acc.replace(key.as_str(), value.as_str())
        })
}

/// Write via a temporary sibling and rename over the original, so an
/// interrupted write never leaves a truncated file.
fn replace_file(path: &Path, content: &str) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}
