//! Internal implementation for the template registry
//!
//! Template trees are embedded with `include_str!` and written out to the
//! templates directory the first time an id is resolved.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::Template;
use crate::error::ScaffoldError;

pub(super) const AVAILABLE: &[&str] = &["nextjs"];

// =============================================================================
// Embedded Resources - nextjs
// =============================================================================

mod nextjs {
    pub const PACKAGE_JSON: &str = include_str!("../../resources/nextjs/package.json");
    pub const README_MD: &str = include_str!("../../resources/nextjs/README.md");
    pub const GITIGNORE: &str = include_str!("../../resources/nextjs/gitignore");
    pub const NEXT_CONFIG_MJS: &str = include_str!("../../resources/nextjs/next.config.mjs");
    pub const TSCONFIG_JSON: &str = include_str!("../../resources/nextjs/tsconfig.json");
    pub const APP_LAYOUT_TSX: &str = include_str!("../../resources/nextjs/app/layout.tsx");
    pub const APP_PAGE_TSX: &str = include_str!("../../resources/nextjs/app/page.tsx");
    pub const APP_GLOBALS_CSS: &str = include_str!("../../resources/nextjs/app/globals.css");
}

/// Install-relative path and content for every embedded nextjs file.
const NEXTJS_FILES: &[(&str, &str)] = &[
    ("package.json", nextjs::PACKAGE_JSON),
    ("README.md", nextjs::README_MD),
    (".gitignore", nextjs::GITIGNORE),
    ("next.config.mjs", nextjs::NEXT_CONFIG_MJS),
    ("tsconfig.json", nextjs::TSCONFIG_JSON),
    ("app/layout.tsx", nextjs::APP_LAYOUT_TSX),
    ("app/page.tsx", nextjs::APP_PAGE_TSX),
    ("app/globals.css", nextjs::APP_GLOBALS_CSS),
];

/// Files that carry the `__APP_NAME__` token.
const NEXTJS_TARGETS: &[&str] = &["package.json", "README.md", "app/layout.tsx"];

// =============================================================================
// Registry
// =============================================================================

fn manifest(id: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match id {
        "nextjs" => Some(NEXTJS_FILES),
        _ => None,
    }
}

pub(super) fn substitution_targets(id: &str) -> &'static [&'static str] {
    match id {
        "nextjs" => NEXTJS_TARGETS,
        _ => &[],
    }
}

pub(super) fn resolve(id: &str, templates_dir: &Path) -> Result<Template, ScaffoldError> {
    let files = manifest(id).ok_or_else(|| ScaffoldError::UnknownTemplate {
        id: id.to_string(),
        available: AVAILABLE.join(", "),
    })?;

    let root = templates_dir.join(id);
    if !root.exists() {
        install(files, &root).map_err(|source| ScaffoldError::InstallFailed {
            id: id.to_string(),
            source,
        })?;
    }

    Ok(Template::new(id, root))
}

fn install(files: &[(&str, &str)], root: &Path) -> io::Result<()> {
    for (rel, content) in files {
        let dest = root.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, content)?;
    }
    Ok(())
}

pub(super) fn file_set(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
