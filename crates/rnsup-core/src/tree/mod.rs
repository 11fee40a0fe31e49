//! Project tree views
//!
//! This module provides:
//! - A depth-limited, ignore-aware directory walk producing a flat pre-order node list
//! - A formatter turning that list into box-drawing tree text

pub mod format;
pub mod walker;

use crate::error::Result;
use crate::naming::SOURCE_ROOT;
use std::path::{Path, PathBuf};

pub use format::{format_file_size, format_tree, humanize_time, FormatOptions};
pub use walker::{walk, walk_with, TreeNode, WalkOptions, DEFAULT_IGNORE, DEFAULT_MAX_DEPTH};

/// Which part of the project the `view` command shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewTarget {
    /// The whole project
    #[default]
    Root,
    /// Only the source root
    Src,
}

impl ViewTarget {
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewTarget::Root => "root",
            ViewTarget::Src => SOURCE_ROOT,
        }
    }

    /// Directory to walk for this target
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        match self {
            ViewTarget::Root => project_root.to_path_buf(),
            ViewTarget::Src => project_root.join(SOURCE_ROOT),
        }
    }
}

/// Walk `root` and render it
pub fn render_tree(root: &Path, walk_options: &WalkOptions, options: &FormatOptions) -> Result<String> {
    let nodes = walk_with(root, walk_options)?;
    Ok(format_tree(&nodes, options))
}
