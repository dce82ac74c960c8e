//! Internal implementation for project materialization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::template::Template;

pub(super) fn materialize(
    template: &Template,
    parent: &Path,
    name: &str,
) -> Result<PathBuf, ScaffoldError> {
    validate_name(name)?;

    let dest = parent.join(name);

    // create_dir is the atomic claim on the destination: it fails if
    // anything, file or directory, already sits at the path.
    if let Err(err) = fs::create_dir(&dest) {
        return Err(if err.kind() == io::ErrorKind::AlreadyExists {
            ScaffoldError::AlreadyExists { path: dest }
        } else {
            copy_failed(&dest, err)
        });
    }

    if let Err(err) = copy_tree(template.root(), &dest) {
        let _ = fs::remove_dir_all(&dest);
        return Err(err);
    }

    Ok(dest)
}

/// The destination must be a single plain path segment under the parent.
fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if invalid {
        return Err(ScaffoldError::InvalidDestination {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Recursively copy a directory tree. `fs::copy` carries the source's
/// permission bits, so executable template files stay executable.
fn copy_tree(src: &Path, dest: &Path) -> Result<(), ScaffoldError> {
    for entry in fs::read_dir(src).map_err(|err| copy_failed(src, err))? {
        let entry = entry.map_err(|err| copy_failed(src, err))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir(&dest_path).map_err(|err| copy_failed(&dest_path, err))?;
            copy_tree(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|err| copy_failed(&src_path, err))?;
        }
    }
    Ok(())
}

fn copy_failed(path: &Path, source: io::Error) -> ScaffoldError {
    ScaffoldError::CopyFailed {
        path: path.to_path_buf(),
        source,
    }
}
