//! Path alias wiring for `tsconfig.json` and `babel.config.js`
//!
//! Every first-level folder under `src/` gets an `@folder` alias so imports
//! like `@components/Button` resolve in both the type checker and bundler.

use crate::error::{Error, Result};
use crate::naming::SOURCE_ROOT;
use serde_json::{json, Map, Value};
use std::path::Path;
use tokio::fs;

/// Aliases written by `setup`, as `(alias, directory)` pairs
pub const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("@src", "src"),
    ("@components", "src/components"),
    ("@features", "src/features"),
    ("@utils", "src/utils"),
    ("@services", "src/services"),
    ("@store", "src/store"),
    ("@hooks", "src/hooks"),
    ("@theme", "src/theme"),
    ("@assets", "src/assets"),
];

const BABEL_ALIAS_MARKER: &str = "alias: {";

/// Alias registered for a generated directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasChange {
    /// Alias key, e.g. `@payments`
    pub alias: String,
    /// Target folder, e.g. `./src/payments`
    pub target: String,
    /// Whether `tsconfig.json` gained the alias
    pub tsconfig_updated: bool,
    /// Whether `babel.config.js` gained the alias
    pub babel_updated: bool,
}

impl AliasChange {
    pub fn changed(&self) -> bool {
        self.tsconfig_updated || self.babel_updated
    }
}

/// Alias key and folder for a directory under the source root.
///
/// Only the first level is aliased: `src/payments/checkout` maps to
/// `@payments` → `./src/payments`.
pub fn alias_for(relative_dir: &str) -> Option<(String, String)> {
    let rest = relative_dir.strip_prefix(&format!("{}/", SOURCE_ROOT))?;
    let first = rest.split('/').next().filter(|s| !s.is_empty())?;
    Some((
        format!("@{}", first),
        format!("./{}/{}", SOURCE_ROOT, first),
    ))
}

async fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

async fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    content.push('\n');
    fs::write(path, content)
        .await
        .map_err(|e| Error::io(path, e))
}

/// `compilerOptions.paths` of a tsconfig, created when missing
fn compiler_paths(tsconfig: &mut Value) -> Option<&mut Map<String, Value>> {
    let root = tsconfig.as_object_mut()?;
    let options = root
        .entry("compilerOptions")
        .or_insert_with(|| json!({}))
        .as_object_mut()?;
    options
        .entry("paths")
        .or_insert_with(|| json!({}))
        .as_object_mut()
}

/// Write `baseUrl` and the standard aliases into `tsconfig.json`, if present
pub async fn setup_ts_alias(root: &Path) -> Result<bool> {
    let path = root.join("tsconfig.json");
    if !path.exists() {
        return Ok(false);
    }

    let mut tsconfig = read_json(&path).await?;

    if let Some(options) = tsconfig
        .as_object_mut()
        .and_then(|o| o.entry("compilerOptions").or_insert_with(|| json!({})).as_object_mut())
    {
        options.insert("baseUrl".to_string(), json!("."));
    }

    if let Some(paths) = compiler_paths(&mut tsconfig) {
        for (alias, dir) in STANDARD_ALIASES {
            paths.insert(format!("{}/*", alias), json!([format!("{}/*", dir)]));
        }
    }

    write_json(&path, &tsconfig).await?;
    Ok(true)
}

async fn add_tsconfig_alias(root: &Path, alias: &str, target: &str) -> Result<bool> {
    let path = root.join("tsconfig.json");
    if !path.exists() {
        return Ok(false);
    }

    let mut tsconfig = read_json(&path).await?;
    let key = format!("{}/*", alias);

    let Some(paths) = compiler_paths(&mut tsconfig) else {
        return Ok(false);
    };
    if paths.contains_key(&key) {
        return Ok(false);
    }
    paths.insert(key, json!([format!("{}/*", target)]));

    write_json(&path, &tsconfig).await?;
    Ok(true)
}

/// Insert an alias entry right after the `alias: {` marker
fn insert_babel_alias(content: &str, alias: &str, target: &str) -> Option<String> {
    if content.contains(&format!("'{}'", alias)) {
        return None;
    }
    let at = content.find(BABEL_ALIAS_MARKER)? + BABEL_ALIAS_MARKER.len();
    Some(format!(
        "{}\n        '{}': '{}',{}",
        &content[..at],
        alias,
        target,
        &content[at..]
    ))
}

async fn add_babel_alias(root: &Path, alias: &str, target: &str) -> Result<bool> {
    let path = root.join("babel.config.js");
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| Error::io(&path, e))?;

    match insert_babel_alias(&content, alias, target) {
        Some(updated) => {
            fs::write(&path, updated)
                .await
                .map_err(|e| Error::io(&path, e))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Register the first-level alias for a generated directory.
///
/// Returns `None` for directories outside the source root.
pub async fn register_alias(root: &Path, relative_dir: &str) -> Result<Option<AliasChange>> {
    let Some((alias, target)) = alias_for(relative_dir) else {
        return Ok(None);
    };

    let tsconfig_updated = add_tsconfig_alias(root, &alias, &target).await?;
    let babel_updated = add_babel_alias(root, &alias, &target).await?;

    if tsconfig_updated || babel_updated {
        tracing::debug!(%alias, %target, tsconfig_updated, babel_updated, "alias registered");
    }

    Ok(Some(AliasChange {
        alias,
        target,
        tsconfig_updated,
        babel_updated,
    }))
}
