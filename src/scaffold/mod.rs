//! Project materialization
//!
//! Copies a template tree into a fresh project directory. Creating the
//! destination directory is the atomic claim on the path: of two runs
//! racing for the same name, exactly one wins and the other fails with
//! `AlreadyExists` before writing anything. A copy failure removes the
//! partially built directory before the error is returned, so callers
//! never see a half-copied project.
//!
//! # Example
//!
//! ```no_run
//! use basta::paths;
//! use basta::scaffold;
//! use basta::template::Template;
//!
//! let template = Template::resolve("nextjs", &paths::templates_dir())?;
//! let project = scaffold::materialize(&template, &std::env::current_dir()?, "my-app")?;
//! println!("created {}", project.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::template::Template;

/// Create `parent/name` and populate it with the template's file tree,
/// preserving relative paths and byte content.
///
/// # Errors
///
/// * [`ScaffoldError::InvalidDestination`] if `name` is not a plain path
///   segment; nothing was written
/// * [`ScaffoldError::AlreadyExists`] if a file or directory is already at
///   `parent/name`; it is left untouched
/// * [`ScaffoldError::CopyFailed`] if an I/O failure interrupted the copy;
///   the destination has been removed
pub fn materialize(
    template: &Template,
    parent: &Path,
    name: &str,
) -> Result<PathBuf, ScaffoldError> {
    internal::materialize(template, parent, name)
}
