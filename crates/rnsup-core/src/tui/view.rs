//! `view` flow: print the project tree

use crate::config;
use crate::tree::{render_tree, FormatOptions, ViewTarget, WalkOptions, DEFAULT_MAX_DEPTH};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Arguments for `view`
#[derive(Debug, Clone, Default)]
pub struct ViewArgs {
    /// Part of the project to show; prompted for when missing
    pub target: Option<ViewTarget>,

    /// Icons, colors and file sizes
    pub pretty: bool,

    /// Show modification times
    pub time: bool,

    /// Maximum depth; falls back to `RNSUP_TREE_DEPTH`, then the default
    pub depth: Option<usize>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

fn select_target(specified: Option<ViewTarget>, yes: bool) -> Result<ViewTarget> {
    if let Some(target) = specified {
        return Ok(target);
    }
    if yes {
        return Ok(ViewTarget::default());
    }

    Ok(cliclack::select("Select view target")
        .initial_value(ViewTarget::Root)
        .item(ViewTarget::Root, "Project root", "Full project structure")
        .item(ViewTarget::Src, "Source folder", "Only src/")
        .interact()?)
}

fn mode_label(options: &FormatOptions) -> &'static str {
    match (options.decorated, options.show_timestamps) {
        (true, true) => "pretty + time",
        (true, false) => "pretty",
        (false, true) => "simple + time",
        (false, false) => "simple",
    }
}

/// Print the tree of the project at `root`
pub async fn run_view(root: &Path, args: ViewArgs) -> Result<()> {
    let target = select_target(args.target, args.yes)?;
    let dir = target.resolve(root);

    if !dir.is_dir() {
        cliclack::log::warning(format!(
            "Directory {} does not exist.",
            target.display_name()
        ))?;
        return Ok(());
    }

    let depth = config::tree_depth(args.depth, DEFAULT_MAX_DEPTH);
    let options = FormatOptions {
        decorated: args.pretty,
        show_timestamps: args.time,
    };
    tracing::debug!(dir = %dir.display(), depth, "rendering tree");

    println!();
    println!(
        "{} {}",
        "Location:".bold(),
        dir.display().to_string().cyan()
    );
    println!("{} {}", "Mode:".bold(), mode_label(&options).dimmed());
    println!();

    let tree = render_tree(&dir, &WalkOptions::with_max_depth(depth), &options)?;
    if tree.is_empty() {
        println!("{}", "No files or folders found in this directory.".yellow());
    } else {
        print!("{}", tree);
    }

    println!();
    println!(
        "{}",
        format!(
            "Depth limit: {} (set {} to change)",
            depth,
            config::TREE_DEPTH_ENV
        )
        .dimmed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_label() {
        assert_eq!(mode_label(&FormatOptions::default()), "simple");
        assert_eq!(
            mode_label(&FormatOptions {
                decorated: true,
                show_timestamps: true
            }),
            "pretty + time"
        );
    }

    #[test]
    fn test_target_defaults_to_root_with_yes() {
        assert_eq!(select_target(None, true).unwrap(), ViewTarget::Root);
        assert_eq!(
            select_target(Some(ViewTarget::Src), false).unwrap(),
            ViewTarget::Src
        );
    }
}
