//! rnsup core - React Native project scaffolding and tree views
//!
//! This library holds everything the `rnsup` binary does, split so the
//! filesystem logic can be used without the interactive prompts.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - name resolution, the directory walk and the tree formatter
//! - **Layer 2: Project Operations** - templates, aliases, package managers, `.rnsup/` state
//! - **Layer 3: CLI/TUI Interface** - cliclack-based flows for each command (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based command flows
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use rnsup_core::{format_tree, walk, FormatOptions, DEFAULT_IGNORE};
//!
//! let nodes = walk(Path::new("."), 3, DEFAULT_IGNORE)?;
//! print!("{}", format_tree(&nodes, &FormatOptions::default()));
//! ```

pub mod alias;
pub mod config;
pub mod error;
pub mod history;
pub mod naming;
pub mod package_manager;
pub mod project;
pub mod templates;
pub mod tree;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use naming::{
    resolve_component_name, resolve_folder_path, resolve_screen_name, FolderTarget, ParsedTarget,
};
pub use tree::{
    format_tree, render_tree, walk, walk_with, FormatOptions, TreeNode, ViewTarget, WalkOptions,
    DEFAULT_IGNORE, DEFAULT_MAX_DEPTH,
};
