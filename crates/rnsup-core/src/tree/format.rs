//! Rendering a flat node list as box-drawing tree text

use super::walker::TreeNode;
use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

const DIR_ICON: &str = "📁 ";
const FILE_ICON: &str = "📄 ";

/// Presentation switches for [`format_tree`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Icons, per-type colors and human-readable file sizes
    pub decorated: bool,

    /// Append the humanized modification time of each entry
    pub show_timestamps: bool,
}

/// Render `nodes` (in walker order) as an indented tree, one line per node.
///
/// An empty list renders to an empty string; printing a "nothing found"
/// message is up to the caller.
pub fn format_tree(nodes: &[TreeNode], options: &FormatOptions) -> String {
    format_tree_at(nodes, options, Local::now())
}

/// Same as [`format_tree`], with "now" fixed for timestamp humanization
pub fn format_tree_at(nodes: &[TreeNode], options: &FormatOptions, now: DateTime<Local>) -> String {
    let last_flags = last_among_siblings(nodes);

    // ancestor_last[level] is whether the latest node seen at that level closed its sibling list
    let mut ancestor_last: Vec<bool> = Vec::new();
    let mut output = String::new();

    for (node, &is_last) in nodes.iter().zip(&last_flags) {
        if node.level > 0 {
            for level in 1..node.level {
                let closed = ancestor_last.get(level).copied().unwrap_or(true);
                output.push_str(if closed { BLANK } else { PIPE });
            }
            output.push_str(if is_last { CORNER } else { BRANCH });
        }

        if ancestor_last.len() <= node.level {
            ancestor_last.resize(node.level + 1, true);
        }
        ancestor_last[node.level] = is_last;

        output.push_str(&format_label(node, options, now));
        output.push('\n');
    }

    output
}

/// Whether each node is the final child of its parent.
///
/// Walking backwards, `sibling_below[level]` records whether a later node at
/// that level shares the current parent; deeper entries are dropped whenever
/// a shallower node is reached because they belong to another parent.
/// Peeking at the next node alone is not enough: a last directory with
/// children is followed by its own subtree, not by a shallower node.
fn last_among_siblings(nodes: &[TreeNode]) -> Vec<bool> {
    let mut flags = vec![true; nodes.len()];
    let mut sibling_below: Vec<bool> = Vec::new();

    for (idx, node) in nodes.iter().enumerate().rev() {
        if sibling_below.len() <= node.level {
            sibling_below.resize(node.level + 1, false);
        }
        flags[idx] = !sibling_below[node.level];
        sibling_below[node.level] = true;
        sibling_below.truncate(node.level + 1);
    }

    flags
}

fn format_label(node: &TreeNode, options: &FormatOptions, now: DateTime<Local>) -> String {
    let mut label = String::new();

    if options.decorated {
        label.push_str(if node.is_dir { DIR_ICON } else { FILE_ICON });
        label.push_str(&colorize(node).to_string());

        if let Some(size) = node.size.filter(|size| *size > 0) {
            label.push(' ');
            label.push_str(&format!("({})", format_file_size(size)).dimmed().to_string());
        }
    } else {
        label.push_str(&node.name);
    }

    if options.show_timestamps {
        if let Some(modified) = node.modified {
            let time = humanize_time(modified, now);
            label.push(' ');
            if options.decorated {
                label.push_str(&time.dimmed().to_string());
            } else {
                label.push_str(&time);
            }
        }
    }

    label
}

/// Directory style, or a file color picked by extension
fn colorize(node: &TreeNode) -> ColoredString {
    let name = node.name.as_str();
    if node.is_dir {
        return name.cyan().bold();
    }

    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "ts" | "tsx" => name.blue(),
        "js" | "jsx" => name.yellow(),
        "json" => name.bright_green(),
        "css" | "scss" | "less" => name.magenta(),
        "png" | "jpg" | "jpeg" | "gif" | "svg" => name.cyan(),
        "yml" | "yaml" | "xml" => name.red(),
        "md" | "mdx" => name.bright_black(),
        _ => name.white(),
    }
}

/// `512B`, `1.5KB`, `2.0MB`
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{}B", bytes)
    } else if bytes < MB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    }
}

/// `Today 14:05` for the current calendar day, `Mar 4, 2026 09:30` otherwise
pub fn humanize_time(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    if modified.date_naive() == now.date_naive() {
        format!("Today {}", modified.format("%H:%M"))
    } else {
        modified.format("%b %-d, %Y %H:%M").to_string()
    }
}
