//! Template registry and on-disk template trees
//!
//! A template is a named, read-only directory tree used as the blueprint
//! for a new project. The shipped templates are embedded in the binary at
//! compile time and extracted to the templates directory on first use,
//! which lets users inspect what they are about to generate.
//!
//! # Example
//!
//! ```no_run
//! use basta::paths;
//! use basta::template::Template;
//!
//! let template = Template::resolve("nextjs", &paths::templates_dir())?;
//! for path in template.file_set()? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Identifiers of the templates shipped with this binary.
pub fn available() -> &'static [&'static str] {
    internal::AVAILABLE
}

/// A named, read-only template tree on disk.
#[derive(Debug, Clone)]
pub struct Template {
    id: String,
    root: PathBuf,
}

impl Template {
    /// Wrap an existing directory as a template.
    pub fn new(id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            root: root.into(),
        }
    }

    /// Look up `id` in the registry, extracting the embedded tree under
    /// `templates_dir` if it is not installed yet.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::UnknownTemplate`] for ids outside the registry,
    /// [`ScaffoldError::InstallFailed`] if extraction fails.
    pub fn resolve(id: &str, templates_dir: &Path) -> Result<Self, ScaffoldError> {
        internal::resolve(id, templates_dir)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted relative paths of every file in the template tree.
    pub fn file_set(&self) -> io::Result<Vec<PathBuf>> {
        internal::file_set(&self.root)
    }

    /// Files, relative to the generated project root, that receive
    /// placeholder substitution after materialization.
    pub fn substitution_targets(&self) -> &'static [&'static str] {
        internal::substitution_targets(&self.id)
    }
}
