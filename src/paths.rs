//! Single source of truth for the create-basta-app filesystem layout.
//!
//! This module defines WHERE tool-owned data lives. It has no I/O, no
//! validation, no business logic.
//!
//! ```text
//! ~/.create-basta-app/
//! └── templates/           # Installed template trees
//!     └── nextjs/          # Extracted from embedded resources on first use
//! ```

use std::path::PathBuf;

/// User's tool home directory: `~/.create-basta-app/`
pub fn basta_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".create-basta-app")
}

/// Root for installed template trees: `~/.create-basta-app/templates/`
pub fn templates_dir() -> PathBuf {
    basta_home().join("templates")
}
