//! Error types for the scaffolding core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All possible errors raised while resolving a template or materializing a
/// project.
///
/// Per-file substitution problems are deliberately not represented here:
/// they are collected as [`Outcome`](crate::inject::Outcome) entries in the
/// substitution report, so one bad file never aborts the rest of the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid project name '{name}'\n  hint: use a single directory name, without path separators")]
    InvalidDestination { name: String },

    #[error("destination already exists: {}\n  hint: pick another name or remove the existing path", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("unknown template '{id}'\n  hint: available templates: {available}")]
    UnknownTemplate { id: String, available: String },

    #[error("failed to install template '{id}': {source}")]
    InstallFailed { id: String, source: io::Error },

    #[error("copy failed at {}: {source}", path.display())]
    CopyFailed { path: PathBuf, source: io::Error },
}
