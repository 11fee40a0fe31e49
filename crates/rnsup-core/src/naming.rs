//! Resolution of user-typed names into project coordinates
//!
//! Generated artifacts always live under the source root (`src/`). The
//! resolvers here are pure string transforms: they never touch the
//! filesystem, and creating the target directory is left to the caller.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Canonical source root every generated artifact is placed under
pub const SOURCE_ROOT: &str = "src";

const COMPONENTS_DIR: &str = "components";
const SCREENS_DIR: &str = "screens";
const SCREEN_SUFFIX: &str = "Screen";

/// A resolved artifact name and the directory it belongs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    /// Final identifier of the generated artifact
    pub entity_name: String,

    /// Absolute target directory (project root joined with `relative_dir`)
    pub target_dir: PathBuf,

    /// Target directory relative to the project root, `/`-separated and
    /// always starting with the source root
    pub relative_dir: String,

    /// Name before artifact-specific shaping was applied
    base_name: String,
}

impl ParsedTarget {
    /// Reject targets whose base name normalized to nothing.
    ///
    /// Screens always carry the `Screen` suffix, so the check looks at the
    /// name the user actually supplied rather than the decorated one.
    pub fn validate(&self) -> Result<()> {
        if self.base_name.is_empty() || self.entity_name.is_empty() {
            return Err(Error::InvalidName(self.entity_name.clone()));
        }
        Ok(())
    }

    /// File name of the generated TSX module
    pub fn file_name(&self) -> String {
        format!("{}.tsx", self.entity_name)
    }

    /// Absolute path of the generated TSX module
    pub fn file_path(&self) -> PathBuf {
        self.target_dir.join(self.file_name())
    }
}

/// A resolved folder for the `generate folder` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTarget {
    /// Last segment of the folder path
    pub folder_name: String,

    /// Absolute folder path
    pub target_dir: PathBuf,

    /// Folder path relative to the project root, `/`-separated
    pub relative_dir: String,
}

impl FolderTarget {
    /// Whether the folder lives under the source root and should get an alias
    pub fn is_under_source_root(&self) -> bool {
        self.relative_dir.starts_with(&format!("{}/", SOURCE_ROOT))
    }
}

/// Steps shared by every resolver: separators, whitespace, extension, `src/`
fn normalize(input: &str, strip_extension: bool) -> String {
    let mut cleaned = input.replace('\\', "/").trim().to_string();

    if strip_extension {
        for ext in [".tsx", ".ts"] {
            if let Some(stripped) = cleaned.strip_suffix(ext) {
                cleaned = stripped.to_string();
                break;
            }
        }
    }

    if let Some(stripped) = cleaned.strip_prefix("src/") {
        cleaned = stripped.to_string();
    }

    cleaned
}

/// Split a cleaned input into its directory segments and raw name
fn split_name(cleaned: &str) -> (Vec<&str>, &str) {
    let mut parts: Vec<&str> = cleaned.split('/').collect();
    let raw_name = parts.pop().unwrap_or_default();
    parts.retain(|segment| !segment.is_empty());
    (parts, raw_name)
}

fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove every trailing "screen", compared case-insensitively
fn strip_screen_suffix(raw: &str) -> &str {
    let suffix_len = SCREEN_SUFFIX.len();
    let mut base = raw;
    while base.len() >= suffix_len && base.is_char_boundary(base.len() - suffix_len) {
        let (head, tail) = base.split_at(base.len() - suffix_len);
        if !tail.eq_ignore_ascii_case(SCREEN_SUFFIX) {
            break;
        }
        base = head;
    }
    base
}

fn join_relative(project_root: &Path, relative_dir: &str) -> PathBuf {
    relative_dir
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(project_root.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Resolve a component name; components always nest under `src/components`.
///
/// `forms/loginbutton` resolves to `Loginbutton` in `src/components/forms`.
pub fn resolve_component_name(project_root: &Path, input: &str) -> ParsedTarget {
    let cleaned = normalize(input, false);
    let (parts, raw_name) = split_name(&cleaned);

    let entity_name = capitalize_first(raw_name);

    let relative_dir = if parts.is_empty() {
        format!("{}/{}", SOURCE_ROOT, COMPONENTS_DIR)
    } else {
        format!("{}/{}/{}", SOURCE_ROOT, COMPONENTS_DIR, parts.join("/"))
    };

    ParsedTarget {
        target_dir: join_relative(project_root, &relative_dir),
        base_name: raw_name.to_string(),
        entity_name,
        relative_dir,
    }
}

/// Resolve a screen name, guaranteeing exactly one trailing `Screen`.
///
/// `login`, `LoginScreen` and `loginscreen` all resolve to `LoginScreen`.
/// A bare name goes to `src/screens`; a name with a sub-path goes to
/// `src/<sub-path>` as typed, without forcing it under `screens/`.
pub fn resolve_screen_name(project_root: &Path, input: &str) -> ParsedTarget {
    let cleaned = normalize(input, true);
    let (parts, raw_name) = split_name(&cleaned);

    let base_name = capitalize_first(strip_screen_suffix(raw_name));
    let entity_name = format!("{}{}", base_name, SCREEN_SUFFIX);

    let relative_dir = if parts.is_empty() {
        format!("{}/{}", SOURCE_ROOT, SCREENS_DIR)
    } else {
        format!("{}/{}", SOURCE_ROOT, parts.join("/"))
    };

    ParsedTarget {
        target_dir: join_relative(project_root, &relative_dir),
        base_name,
        entity_name,
        relative_dir,
    }
}

/// Resolve a folder path relative to the project root.
///
/// Unlike screens and components the path is used verbatim: `src/payments`
/// stays under `src/`, while `docs/guides` is created at the project root.
pub fn resolve_folder_path(project_root: &Path, input: &str) -> Result<FolderTarget> {
    let cleaned = input.replace('\\', "/");
    let relative_dir = cleaned.trim().trim_end_matches('/').to_string();

    let folder_name = relative_dir
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    if folder_name.is_empty() {
        return Err(Error::InvalidName(input.to_string()));
    }

    Ok(FolderTarget {
        target_dir: join_relative(project_root, &relative_dir),
        folder_name,
        relative_dir,
    })
}
