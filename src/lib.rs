//! Scaffolding core for `create-basta-app`
//!
//! Materializes a bundled template as a new project directory and rewrites
//! placeholder tokens in a declared subset of the copied files. The binary
//! in `src/main.rs` is a thin driver over this library: it resolves a
//! project name, runs the materialize-then-inject pass, and renders the
//! structured results this crate returns.

pub mod error;
pub mod inject;
pub mod paths;
pub mod scaffold;
pub mod template;

// Re-export commonly used types
pub use error::ScaffoldError;
pub use inject::{InjectReport, Outcome, PlaceholderMap};
pub use template::Template;
